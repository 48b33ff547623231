//! qlex_options: lexer options and `qlex.json` loading.
//!
//! Every field is optional in the file; missing fields take their defaults.
//!
//! ```json
//! {
//!   "literals": "q",
//!   "identifierLongerAlt": true,
//!   "maxDiagnostics": 100,
//!   "keepTrivia": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`find_config`].
pub const CONFIG_FILE_NAME: &str = "qlex.json";

/// Which literal scanner the driver consults after the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralMode {
    /// The built-in q literal scanner.
    #[default]
    Q,
    /// No literal scanner; anything the classifier misses is an error token.
    None,
}

/// Options controlling a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LexOptions {
    pub literals: LiteralMode,
    /// Prefer a strictly longer identifier over a reserved-word prefix.
    ///
    /// When set, the literal scanner is also consulted at offsets the
    /// keyword/operator classifier already matched. With the default `false`
    /// it only sees offsets the classifier rejected.
    pub identifier_longer_alt: bool,
    /// Cap on collected diagnostics.
    pub max_diagnostics: Option<usize>,
    /// Record discarded trivia spans. Preserved spans are always recorded.
    pub keep_trivia: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            literals: LiteralMode::Q,
            identifier_longer_alt: false,
            max_diagnostics: None,
            keep_trivia: true,
        }
    }
}

/// Errors raised while loading options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid options in {path}: {source}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse options from JSON text.
pub fn parse_options(content: &str) -> Result<LexOptions, OptionsError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse an options file.
pub fn read_options(path: &Path) -> Result<LexOptions, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = serde_json::from_str(&content).map_err(|source| OptionsError::InvalidFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded options");
    Ok(options)
}

/// Find the nearest `qlex.json` in `start` or one of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Load options from the nearest `qlex.json`, or defaults when there is none.
pub fn discover_options(start: &Path) -> Result<LexOptions, OptionsError> {
    match find_config(start) {
        Some(path) => read_options(&path),
        None => Ok(LexOptions::default()),
    }
}
