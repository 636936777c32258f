//! Attachment metadata resolution: file names, MIME types, media kinds.
//!
//! Every function here is total. Unknown input resolves to an "unknown"
//! answer instead of an error.
//!
//! CHANGELOG:
//! - 02/14/2026 - Split classifier into ordered rule chain
//! - 02/11/2026 - Initial module structure

pub mod classify;
pub mod mime;
pub mod path;

pub use classify::{classify, LabelLocale, MediaClassification, MediaFacts, MediaLabels};
pub use mime::{resolve_mime, UNKNOWN_MIME};
pub use path::{basename, extension};
