//! HTTP client for the FDSN event web service.

mod client;
mod error;

pub use client::FdsnClient;
