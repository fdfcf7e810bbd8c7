//! Template answers: the inputs resolved before rendering.
//!
//! # Responsibility
//! - Model primary answers and compute derived, non-interactive values.
//! - Reject answers that cannot produce a valid project.
//!
//! # Invariants
//! - Derived values are pure functions of the primary answers.
//! - A missing `package_name` is derived from `project_name`.

use crate::template::TemplateError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static PACKAGE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid package name regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid separator regex"));

/// Target language version offered by the template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PythonVersion {
    #[serde(rename = "3.11")]
    V3_11,
    #[default]
    #[serde(rename = "3.12")]
    V3_12,
    #[serde(rename = "3.13")]
    V3_13,
}

impl PythonVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V3_11 => "3.11",
            Self::V3_12 => "3.12",
            Self::V3_13 => "3.13",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Answers collected by the template before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateAnswers {
    pub project_name: String,
    /// Importable package identifier; derived from `project_name` when unset.
    #[serde(default)]
    pub package_name: Option<String>,
    pub author_name: String,
    pub author_email: String,
    #[serde(default)]
    pub python_version: PythonVersion,
    #[serde(default = "default_true")]
    pub include_examples: bool,
    #[serde(default = "default_true")]
    pub include_ci: bool,
    #[serde(default = "default_true")]
    pub include_scripts: bool,
}

impl TemplateAnswers {
    /// Reads answers from a JSON file and validates them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| TemplateError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TemplateError> {
        let answers: Self = serde_json::from_str(raw)?;
        answers.validate()?;
        Ok(answers)
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.project_name.trim().is_empty() {
            return Err(TemplateError::InvalidAnswer {
                field: "project_name",
                reason: "must not be empty".to_string(),
            });
        }

        let package = self.package_name();
        if !PACKAGE_NAME_RE.is_match(&package) {
            return Err(TemplateError::InvalidAnswer {
                field: "package_name",
                reason: format!("`{package}` is not a valid package identifier"),
            });
        }

        if !self.author_email.contains('@') {
            return Err(TemplateError::InvalidAnswer {
                field: "author_email",
                reason: format!("`{}` is not an email address", self.author_email),
            });
        }

        Ok(())
    }

    /// Effective package identifier.
    pub fn package_name(&self) -> String {
        match &self.package_name {
            Some(name) => name.clone(),
            None => derive_package_name(&self.project_name),
        }
    }

    /// Command name installed for the generated CLI.
    pub fn cli_name(&self) -> String {
        self.package_name().replace('_', "-")
    }

    /// Fully qualified entry-point path for the generated CLI.
    pub fn entry_point(&self) -> String {
        format!("{}.cli:app", self.package_name())
    }
}

/// `"My Cool-App"` becomes `"my_cool_app"`.
pub fn derive_package_name(project_name: &str) -> String {
    let lowered = project_name.trim().to_ascii_lowercase();
    SEPARATOR_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}
