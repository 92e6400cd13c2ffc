//! Field extraction from enhancement issue bodies
//!
//! Enhancement issues follow a loose template:
//!
//! ```markdown
//! - One-line enhancement description (can be used as a release note): Sidecars start first
//! - Kubernetes Enhancement Proposal (KEP): #753 -
//! - Responsible SIGs: sig/node, sig/apps
//! ```
//!
//! Each field is located by its label and read from the rest of that line;
//! a SIG list may instead follow on the lines below its label.
//! Scraping is best-effort: a missing or malformed label yields an empty or
//! zero value, never an error.

use tracing::debug;

/// Label preceding the release note text
pub const RELEASE_NOTE_LABEL: &str = "release note): ";

/// Labels preceding the KEP reference, tried in order
pub const DESIGN_DOC_LABELS: [&str; 2] = ["(KEP): #", "(community repo):"];

/// Label preceding the responsible SIG list
pub const RESPONSIBLE_GROUPS_LABEL: &str = "- Responsible SIGs:";

/// KEP links are this prefix followed by the KEP number
pub const DESIGN_DOC_BASE_URL: &str = "https://github.com/kubernetes/enhancements/pull/";

/// Fields scraped from one issue body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFields {
    /// Release note text
    pub text: String,
    /// KEP number, 0 when absent or unparsable
    pub design_doc_number: u64,
    /// KEP link, empty when there is no KEP number
    pub design_doc_url: String,
    /// Responsible SIGs, verbatim
    pub responsible_groups: String,
}

impl BodyFields {
    /// Extract every field from an issue body
    pub fn parse(body: &str) -> Self {
        let design_doc_number = design_doc_number(body);
        Self {
            text: release_note_text(body),
            design_doc_number,
            design_doc_url: design_doc_url(design_doc_number),
            responsible_groups: responsible_groups(body),
        }
    }
}

/// Release note text: the rest of the labeled line, or the whole body
/// when the label is missing. Trailing newlines are dropped either way.
pub fn release_note_text(body: &str) -> String {
    let text = labeled_line(body, RELEASE_NOTE_LABEL).unwrap_or(body);
    text.trim_end_matches(['\n', '\r']).to_string()
}

/// KEP number referenced by the body, or 0
pub fn design_doc_number(body: &str) -> u64 {
    let Some(reference) = DESIGN_DOC_LABELS
        .iter()
        .find_map(|label| labeled_line(body, label))
    else {
        debug!("No KEP label in issue body");
        return 0;
    };

    let reference = trim_segment(reference).trim_start_matches('#');
    let number = if reference.starts_with("http") {
        // "(community repo): https://github.com/kubernetes/enhancements/pull/753"
        let link = reference.split_whitespace().next().unwrap_or_default();
        leading_digits(link.trim_end_matches('/').rsplit('/').next().unwrap_or_default())
    } else {
        leading_digits(reference)
    };

    match number.parse::<u64>() {
        Ok(number) => number,
        Err(e) => {
            debug!(reference, error = %e, "Unparsable KEP reference");
            0
        }
    }
}

/// KEP link for a number, empty for 0
pub fn design_doc_url(number: u64) -> String {
    if number == 0 {
        String::new()
    } else {
        format!("{DESIGN_DOC_BASE_URL}{number}")
    }
}

/// Responsible SIG list, label and surrounding punctuation removed
///
/// The list is usually on the label's line. When that line is empty the
/// following lines are taken instead, up to a blank line or the next
/// template field, one SIG per line.
pub fn responsible_groups(body: &str) -> String {
    let Some(start) = body.find(RESPONSIBLE_GROUPS_LABEL) else {
        return String::new();
    };
    let rest = &body[start + RESPONSIBLE_GROUPS_LABEL.len()..];
    let mut lines = rest.lines();

    let first = trim_segment(lines.next().unwrap_or_default());
    if !first.is_empty() {
        return first.to_string();
    }

    lines
        .map(str::trim)
        .take_while(|line| !line.is_empty() && !is_template_field(line))
        .map(trim_segment)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A template bullet such as "- Enhancement target (...):"
fn is_template_field(line: &str) -> bool {
    line.starts_with("- ") && line.contains(':')
}

/// The run of ASCII digits at the start of `s`
fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Text between the first occurrence of `label` and the end of its line
fn labeled_line<'a>(body: &'a str, label: &str) -> Option<&'a str> {
    let start = body.find(label)? + label.len();
    let rest = &body[start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Strip whitespace and the template's dangling " -" separators
fn trim_segment(segment: &str) -> &str {
    segment
        .trim_matches(|c: char| c.is_whitespace() || c == '-')
        .trim()
}
