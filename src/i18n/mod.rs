//! Internationalization (i18n) module for the site's languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type; only enabled registry codes can be built
//! - `strings`: Localized navigation labels and page texts
//!
//! # Example
//!
//! ```rust
//! use clinic_site::i18n::{Language, LanguageRegistry};
//!
//! let default = Language::default_language();
//! assert_eq!(default.code(), "tr");
//!
//! let english = Language::from_code("en").unwrap();
//! assert_eq!(english.strings().nav_contact, "Contact");
//!
//! assert_eq!(LanguageRegistry::get().list_enabled().len(), 4);
//! ```

mod language;
mod registry;
mod strings;

pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
