//! # Validate Subcommand
//!
//! Runs template validation on a draft file without touching any
//! store. HR teams keep draft templates in version control; this is
//! the pre-flight check before they are created through the API.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use cadence_template::{validate, Template, TemplateDraft, TemplateError};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a template draft, JSON or YAML by file extension.
    pub file: PathBuf,
}

/// The draft file formats we accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    /// `.json` files.
    Json,
    /// Everything else is parsed as YAML.
    Yaml,
}

impl DraftFormat {
    /// Pick a format from a file path.
    pub fn from_path(path: &PathBuf) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse and validate a draft from text.
pub fn validate_text(text: &str, format: DraftFormat) -> anyhow::Result<Template> {
    let draft: TemplateDraft = match format {
        DraftFormat::Json => serde_json::from_str(text).context("parse JSON draft")?,
        DraftFormat::Yaml => serde_yaml::from_str(text).context("parse YAML draft")?,
    };
    validate(draft).map_err(|err: TemplateError| anyhow::anyhow!("invalid template: {err}"))
}

/// Run the subcommand.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let template = validate_text(&text, DraftFormat::from_path(&args.file))?;
    println!(
        "OK: {:?} — {} criteria on a {} scale",
        template.name,
        template.criteria.len(),
        template.scale.kind
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_YAML: &str = r#"
name: Engineering Annual Review
kind: ANNUAL
scale:
  kind: FIVE_POINT
  min: 1
  max: 5
  step: 1
  labels: [Poor, Below, Meets, Exceeds, Outstanding]
criteria:
  - key: delivery
    title: Delivery
    weight: 60.0
  - key: teamwork
    title: Teamwork
    weight: 40.0
"#;

    #[test]
    fn test_valid_yaml_draft() {
        let template = validate_text(GOOD_YAML, DraftFormat::Yaml).unwrap();
        assert_eq!(template.criteria.len(), 2);
        assert!(template.is_active);
    }

    #[test]
    fn test_weight_sum_failure_is_reported() {
        let bad = GOOD_YAML.replace("weight: 40.0", "weight: 39.0");
        let err = validate_text(&bad, DraftFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_json_draft() {
        let json = r#"{
            "name": "Probation Review",
            "kind": "PROBATIONARY",
            "scale": {
                "kind": "THREE_POINT",
                "min": 1, "max": 3, "step": 1,
                "labels": ["Below", "Meets", "Exceeds"]
            },
            "criteria": [
                {"key": "overall", "title": "Overall", "weight": 100.0}
            ]
        }"#;
        assert!(validate_text(json, DraftFormat::Json).is_ok());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DraftFormat::from_path(&PathBuf::from("draft.json")),
            DraftFormat::Json
        );
        assert_eq!(
            DraftFormat::from_path(&PathBuf::from("draft.yaml")),
            DraftFormat::Yaml
        );
    }
}
