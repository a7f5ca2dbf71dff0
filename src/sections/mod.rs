//! Password evaluation sections
//!
//! Each section checks one criterion.

mod common;
mod length;
mod variety;

pub use common::common_section;
pub use length::{MIN_LENGTH, length_section};
pub use variety::{lowercase_section, number_section, symbol_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Criterion unmet, with the advice to show
/// - `None` - Criterion met
pub type SectionResult = Option<&'static str>;
