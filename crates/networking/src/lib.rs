//! Networking utilities for the Maps embed resolver
//!
//! This crate provides the HTTP collaborator used to expand short links:
//! a single GET with redirect-following that reports the final effective URL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;

pub use client::{ClientConfig, HttpClient, NetworkError, RedirectResolver};
