//! Password generation and strength feedback library
//!
//! The engine behind a password-hygiene workshop: a random password
//! generator and a six-criterion strength analyzer with per-criterion
//! suggestions.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable analysis over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Optional file extending the built-in common
//!   password denylist (see [`Denylist::from_env`])
//!
//! # Example
//!
//! ```rust
//! use pwd_trainer::{analyze, generate, GeneratorConfig, StrengthTier};
//!
//! let password = generate(&GeneratorConfig::default());
//! assert_eq!(password.chars().count(), 12);
//!
//! let result = analyze("Tr33$&Fl0w3r#Sun!");
//! assert_eq!(result.score, 6);
//! assert_eq!(result.tier, StrengthTier::Excellent);
//! println!("Strength: {} ({}%)", result.tier, result.percent());
//! ```

// Internal modules
mod analyzer;
mod denylist;
mod generator;
mod sections;
mod types;

// Public API
pub use analyzer::{PERFECT_MESSAGE, PasswordAnalyzer, analyze, analyze_secret};
pub use denylist::{DENYLIST_PATH_ENV, Denylist, DenylistError};
pub use generator::{
    GeneratorConfig, LENGTH_CLAMP, LOWERCASE, NUMBERS, SYMBOLS, UI_LENGTH_RANGE, UPPERCASE,
    generate, generate_secret, generate_with_rng,
};
pub use sections::MIN_LENGTH;
pub use types::{Criteria, Criterion, MAX_SCORE, StrengthResult, StrengthTier};

#[cfg(feature = "async")]
pub use analyzer::DEBOUNCE;
