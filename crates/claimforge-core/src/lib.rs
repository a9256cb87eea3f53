//! ClaimForge Core Library
//!
//! Domain models and submission logic for the ClaimForge claim analysis
//! client. Network access lives behind [`submission::AnalysisBackend`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod submission;
pub mod theme;

pub use analysis::{render, AnalysisResult, ClaimRequest, Section};
pub use config::{ClientConfig, Endpoint};
pub use error::{ClaimError, ClaimResult};
pub use submission::{
    AnalysisBackend, ClaimSubmissionHandler, OutputSurface, SubmissionOutcome, SubmitControl,
};
pub use theme::{PreferenceStore, Theme, ThemeManager};
