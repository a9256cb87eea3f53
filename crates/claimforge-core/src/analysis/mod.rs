//! Claim analysis results and their text rendering.

pub mod model;

pub use model::{AnalysisResult, ClaimRequest};

/// Shown when a response carries none of the known fields.
pub const NO_OUTPUT_MESSAGE: &str = "No meaningful output returned from analysis.";

pub const SUMMARY_HEADING: &str = "Summary:";
pub const FLAGS_HEADING: &str = "Flags:";
pub const SCORE_HEADING: &str = "Confidence Score:";
pub const RESPONSE_HEADING: &str = "Full Response:";

/// Digits after the point needed to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// One displayable block of an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: String,
    /// Body follows the heading on the same line.
    pub inline: bool,
}

impl Section {
    fn block(heading: &'static str, body: impl Into<String>) -> Self {
        Self { heading, body: body.into(), inline: false }
    }

    fn to_text(&self) -> String {
        let sep = if self.inline { " " } else { "\n" };
        format!("{}{}{}", self.heading, sep, self.body)
    }
}

/// Split a result into its displayable blocks.
///
/// Blocks appear in a fixed order (summary, flags, score, full response) and
/// each is emitted only when its field holds something displayable.
pub fn sections(result: &AnalysisResult) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(summary) = result.summary.as_deref().filter(|s| !s.is_empty()) {
        sections.push(Section::block(SUMMARY_HEADING, summary));
    }

    if let Some(flags) = result.flags.as_ref().filter(|f| !f.is_empty()) {
        sections.push(Section::block(FLAGS_HEADING, flags.join("\n")));
    }

    if let Some(score) = result.score {
        sections.push(Section {
            heading: SCORE_HEADING,
            body: format!("{}%", format_percent(score)),
            inline: true,
        });
    }

    if let Some(response) = result.response.as_deref().filter(|s| !s.is_empty()) {
        sections.push(Section::block(RESPONSE_HEADING, response));
    }

    sections
}

/// Render an analysis result as plain text.
pub fn render(result: &AnalysisResult) -> String {
    render_sections(&sections(result))
}

/// Join sections into display text; every block but the full response is
/// followed by a blank line.
pub fn render_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return NO_OUTPUT_MESSAGE.to_string();
    }

    let mut text = String::new();
    for section in sections {
        text.push_str(&section.to_text());
        if section.heading != RESPONSE_HEADING {
            text.push_str("\n\n");
        }
    }
    text
}

/// Format a 0..1 score as a percentage with one decimal digit.
///
/// `score * 100` is rounded from its exact decimal value with halves going
/// away from zero, the same digits JavaScript's `toFixed(1)` produces.
pub fn format_percent(score: f64) -> String {
    let percent = score * 100.0;
    if percent.is_nan() {
        return "NaN".to_string();
    }
    if percent.is_infinite() {
        return if percent > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, percent.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut fraction = fraction.chars();
    let tenth = fraction.next().unwrap_or('0');
    let round_up = fraction.next().map_or(false, |d| d >= '5');

    let mut digits: Vec<u8> = int_part.bytes().chain(std::iter::once(tenth as u8)).collect();
    if round_up {
        increment_decimal(&mut digits);
    }

    let (whole, tenths) = digits.split_at(digits.len() - 1);
    format!(
        "{}{}.{}",
        if percent < 0.0 { "-" } else { "" },
        String::from_utf8_lossy(whole),
        tenths[0] as char
    )
}

/// Add one to a string of ASCII decimal digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
