//! Rendering of extracted DDL for stdout.

use crate::ddl::ObjectRef;
use crate::error::{DdlError, Result};
use serde::{Deserialize, Serialize};

/// Output format for the extracted DDL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The DDL text as returned by the catalog.
    #[default]
    Text,
    /// A JSON object with the object's identity and its DDL.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Post-processing applied to retrieved DDL before it is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostProcess {
    /// Remove every double-quote character.
    pub strip_quotes: bool,
}

impl PostProcess {
    /// Applies the configured steps to `ddl`.
    pub fn apply(&self, ddl: String) -> String {
        if self.strip_quotes {
            strip_quotes(&ddl)
        } else {
            ddl
        }
    }
}

/// Removes double quotes around quoted identifiers.
pub fn strip_quotes(ddl: &str) -> String {
    ddl.replace('"', "")
}

#[derive(Serialize)]
struct Extraction<'a> {
    #[serde(flatten)]
    object: &'a ObjectRef,
    ddl: &'a str,
}

/// Renders the final text written to stdout, without a trailing newline.
pub fn render(object: &ObjectRef, ddl: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(ddl.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&Extraction { object, ddl })
            .map_err(|e| DdlError::config(format!("Failed to encode JSON output: {e}"))),
    }
}
