//! Merge translated key/value dictionaries into `.lang` templates.
//!
//! The core is [`merge::merge`]; the other modules load its inputs and
//! write its output.

pub mod cli;
pub mod config;
pub mod convert;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod merge;
pub mod template;
pub mod utils;

pub use dictionary::{load_dictionary, Dictionary};
pub use error::{ConvertError, DictionaryError, TemplateError};
pub use merge::{merge, merge_with_report, MergeReport, Replacements};
