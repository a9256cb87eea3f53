//! # ClaimForge Client
//!
//! reqwest implementation of the analysis backend used by the ClaimForge CLI.

pub mod http;

pub use http::HttpAnalysisClient;
