//! Major theme records

use serde::{Deserialize, Serialize};

/// A major theme selected to be highlighted for the release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    /// Number of the enhancement issue this theme came from. Unique per theme.
    #[serde(rename = "issue_num")]
    pub issue_number: u64,

    /// Title of the enhancement issue
    pub issue_title: String,

    /// Link to the enhancement issue
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_url: String,

    /// Release note text
    pub text: String,

    /// KEP number, 0 when the issue does not reference one
    #[serde(rename = "kep_number")]
    pub design_doc_number: u64,

    /// Link to the KEP
    #[serde(rename = "kep_url", default, skip_serializing_if = "String::is_empty")]
    pub design_doc_url: String,

    /// Responsible SIGs as written in the issue
    #[serde(rename = "sigs", default, skip_serializing_if = "String::is_empty")]
    pub responsible_groups: String,
}

impl ThemeRecord {
    /// Whether the theme references a KEP
    pub fn has_design_doc(&self) -> bool {
        self.design_doc_number != 0
    }
}
