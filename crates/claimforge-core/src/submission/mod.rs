//! Claim submission handling.
//!
//! One `submit` call per user submission: validate, disable the submit
//! control, call the analysis backend once, render the result (or the fixed
//! error message) and re-enable the control.

pub mod control;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::analysis::{self, AnalysisResult, Section};
use crate::error::{ClaimError, ClaimResult};

pub use control::{SubmitControl, SubmitGuard};

/// Shown when the trimmed claim is empty.
pub const EMPTY_CLAIM_MESSAGE: &str = "Please enter a claim.";

/// Shown while the request is in flight.
pub const ANALYZING_MESSAGE: &str = "Analyzing claim. Please wait...";

/// Shown for every transport, HTTP status and parse failure.
pub const BACKEND_ERROR_MESSAGE: &str = "❌ Error: Unable to reach backend or process response.";

/// The remote analysis service.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Send one claim and return the parsed result.
    async fn analyze(&self, claim: &str) -> ClaimResult<AnalysisResult>;
}

/// Where user-visible text goes. Each call replaces what was shown before.
pub trait OutputSurface: Send + Sync {
    fn show(&self, text: &str);

    /// Show a rendered analysis. `text` is `sections` joined for plain
    /// display; surfaces that style headings can use the sections instead.
    fn show_analysis(&self, sections: &[Section], text: &str) {
        let _ = sections;
        self.show(text);
    }
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The analysis was rendered; carries the displayed text.
    Rendered(String),
    /// The claim was empty; nothing was sent.
    Rejected,
    /// The request failed; the fixed error message was displayed.
    Failed(ClaimError),
    /// Another submission was still in flight.
    Busy,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Drives a single claim through the analysis backend.
pub struct ClaimSubmissionHandler<B, O> {
    backend: B,
    output: O,
    control: SubmitControl,
}

impl<B, O> ClaimSubmissionHandler<B, O>
where
    B: AnalysisBackend,
    O: OutputSurface,
{
    pub fn new(backend: B, output: O) -> Self {
        Self {
            backend,
            output,
            control: SubmitControl::new(),
        }
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Submit a claim.
    ///
    /// The control is enabled again on every exit path, including a panic in
    /// the backend or the future being dropped mid-request.
    pub async fn submit(&self, raw: &str) -> SubmissionOutcome {
        // A disabled control takes no input at all, empty or not
        let Some(_guard) = self.control.try_disable() else {
            debug!("Submission ignored while another is in flight");
            return SubmissionOutcome::Busy;
        };

        let claim = raw.trim();
        if claim.is_empty() {
            self.output.show(EMPTY_CLAIM_MESSAGE);
            return SubmissionOutcome::Rejected;
        }

        self.output.show(ANALYZING_MESSAGE);
        debug!(chars = claim.chars().count(), "Submitting claim");

        match self.backend.analyze(claim).await {
            Ok(result) => {
                let sections = analysis::sections(&result);
                let text = analysis::render_sections(&sections);
                self.output.show_analysis(&sections, &text);
                SubmissionOutcome::Rendered(text)
            }
            Err(err) => {
                error!(error = %err, "Claim analysis failed");
                self.output.show(BACKEND_ERROR_MESSAGE);
                SubmissionOutcome::Failed(err)
            }
        }
    }
}
