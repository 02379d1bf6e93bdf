//! HTTP client shared by outbound adapters

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
