//! Rendering of extracted themes

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{OutputFormat, Result, ThemeRecord};

/// Major themes for one release, ready to be written out
#[derive(Debug, Clone, Serialize)]
pub struct ThemeReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Organization the themes were read from
    pub org: String,
    /// Repository the themes were read from
    pub repo: String,
    /// Themes in the order they were requested
    pub themes: Vec<ThemeRecord>,
}

impl ThemeReport {
    /// Wrap themes fetched from `org/repo`
    pub fn new(org: impl Into<String>, repo: impl Into<String>, themes: Vec<ThemeRecord>) -> Self {
        Self {
            generated_at: Utc::now(),
            org: org.into(),
            repo: repo.into(),
            themes,
        }
    }

    /// Render in the given format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Markdown => Ok(self.to_markdown()),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Markdown section suitable for pasting into release notes
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Major Themes\n");

        for theme in &self.themes {
            out.push_str(&format!("\n### {}\n\n", theme.issue_title));
            if !theme.text.is_empty() {
                out.push_str(&format!("{}\n\n", theme.text));
            }

            if theme.has_design_doc() {
                out.push_str(&format!(
                    "- KEP: [#{}]({})\n",
                    theme.design_doc_number, theme.design_doc_url
                ));
            }
            if !theme.responsible_groups.is_empty() {
                out.push_str(&format!("- SIGs: {}\n", theme.responsible_groups));
            }
            if theme.issue_url.is_empty() {
                out.push_str(&format!("- Tracking issue: #{}\n", theme.issue_number));
            } else {
                out.push_str(&format!(
                    "- Tracking issue: [#{}]({})\n",
                    theme.issue_number, theme.issue_url
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(themes: Vec<ThemeRecord>) -> ThemeReport {
        ThemeReport::new(crate::DEFAULT_ORG, crate::DEFAULT_REPO, themes)
    }

    fn sidecar() -> ThemeRecord {
        ThemeRecord {
            issue_number: 753,
            issue_title: "Sidecar Containers".to_string(),
            issue_url: "https://github.com/kubernetes/enhancements/issues/753".to_string(),
            text: "Sidecars start before app containers".to_string(),
            design_doc_number: 3761,
            design_doc_url: "https://github.com/kubernetes/enhancements/pull/3761".to_string(),
            responsible_groups: "sig/node".to_string(),
        }
    }

    #[test]
    fn test_markdown_full_theme() {
        let md = report(vec![sidecar()]).to_markdown();

        assert!(md.starts_with("# Major Themes\n"));
        assert!(md.contains("### Sidecar Containers\n\nSidecars start before app containers\n"));
        assert!(md.contains("- KEP: [#3761](https://github.com/kubernetes/enhancements/pull/3761)"));
        assert!(md.contains("- SIGs: sig/node"));
        assert!(md.contains(
            "- Tracking issue: [#753](https://github.com/kubernetes/enhancements/issues/753)"
        ));
    }

    #[test]
    fn test_markdown_omits_missing_fields() {
        let theme = ThemeRecord {
            issue_number: 1,
            issue_title: "Bare".to_string(),
            ..Default::default()
        };

        let md = report(vec![theme]).to_markdown();

        assert!(!md.contains("KEP"));
        assert!(!md.contains("SIGs"));
        assert!(md.contains("- Tracking issue: #1"));
    }

    #[test]
    fn test_markdown_keeps_order() {
        let mut second = sidecar();
        second.issue_title = "Second".to_string();

        let md = report(vec![sidecar(), second]).to_markdown();

        let first_pos = md.find("Sidecar Containers").unwrap();
        let second_pos = md.find("Second").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_json_report() {
        let json = report(vec![sidecar()]).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["org"], "kubernetes");
        assert_eq!(value["repo"], "enhancements");
        assert_eq!(value["themes"][0]["issue_num"], 753);
        assert_eq!(value["themes"][0]["kep_number"], 3761);
        assert!(value["generated_at"].is_string());
    }
}
