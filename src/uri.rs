//! Classification and parsing of loadable-code URI specifications.
//!
//! A configuration or netlist value whose scheme is `code:` names a shared
//! library plus an entry-point symbol within it. Classification is a shallow
//! syntax gate: it decides how the value should be interpreted, nothing more.

use std::fmt;

use thiserror::Error;

/// Scheme prefix marking a spec string as a loadable-code reference.
pub const CODE_SCHEME: &str = "code:";

/// Returns `true` when `spec` is a loadable-code URI.
///
/// This is a syntax check only: the string must begin with the literal,
/// case-sensitive `code:` prefix at offset zero. Nothing after the prefix is
/// validated, and no attempt is made to verify that the referenced library
/// or entry point exists or is loadable.
#[must_use]
pub fn is_loadable_code_uri(spec: &str) -> bool {
    spec.starts_with(CODE_SCHEME)
}

/// Errors raised while splitting a `code:` URI into its components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeUriError {
    /// The spec does not carry the `code:` scheme at offset zero.
    #[error("not a loadable-code URI: {0:?}")]
    WrongScheme(String),
    /// The spec carries the scheme but names no library.
    #[error("loadable-code URI has an empty library component")]
    EmptyLibrary,
}

/// A parsed `code:<library>[:<entry>]` reference.
///
/// The entry-point symbol is taken after the last `:` in the body, so library
/// paths containing `:` remain representable as long as an entry point
/// follows. An absent or empty entry component parses as `None`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeUri {
    library: String,
    entry_point: Option<String>,
}

impl CodeUri {
    /// Splits a loadable-code URI into its library path and entry point.
    pub fn parse(spec: &str) -> Result<Self, CodeUriError> {
        let body = spec
            .strip_prefix(CODE_SCHEME)
            .ok_or_else(|| CodeUriError::WrongScheme(spec.to_string()))?;
        let (library, entry) = match body.rsplit_once(':') {
            Some((lib, entry)) => (lib, Some(entry)),
            None => (body, None),
        };
        if library.is_empty() {
            return Err(CodeUriError::EmptyLibrary);
        }
        Ok(Self {
            library: library.to_string(),
            entry_point: entry.filter(|e| !e.is_empty()).map(str::to_string),
        })
    }

    /// Path of the shared library named by the URI.
    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Entry-point symbol within the library, when one was given.
    #[must_use]
    pub fn entry_point(&self) -> Option<&str> {
        self.entry_point.as_deref()
    }
}

impl fmt::Display for CodeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry_point {
            Some(entry) => write!(f, "{CODE_SCHEME}{}:{entry}", self.library),
            None => write!(f, "{CODE_SCHEME}{}", self.library),
        }
    }
}
