//! Project template answers and generation planning.
//!
//! # Responsibility
//! - Resolve template inputs and their derived values.
//! - Produce the file inclusion and post-generation plan for a renderer.
//!
//! Rendering file contents is left to an external template engine.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod answers;
pub mod plan;

#[derive(Debug)]
pub enum TemplateError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidAnswer {
        field: &'static str,
        reason: String,
    },
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read answers `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid answers file: {err}"),
            Self::InvalidAnswer { field, reason } => write!(f, "invalid answer `{field}`: {reason}"),
        }
    }
}

impl Error for TemplateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidAnswer { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
