#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Classification and parsing of `code:` loadable-code URIs.
pub mod uri;
/// Time/value sample pairs for piecewise-linear waveforms.
pub mod waveform;
/// C-ABI types and declaration macros shared with external device models.
pub mod boundary;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
