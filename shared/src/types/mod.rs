//! Type definitions shared across the workspace
//!
//! - `locale` - Language/region tags used to pick the verification message language

pub mod locale;

pub use locale::{Locale, ParseLocaleError};
