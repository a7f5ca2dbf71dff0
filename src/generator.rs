//! Random password generation
//!
//! Draws each character uniformly, with replacement, from the concatenation
//! of the enabled character classes.
//!
//! Output is meant for demonstration and training. It is not intended as a
//! source of production secrets.

use std::ops::RangeInclusive;

use rand::Rng;
use secrecy::SecretString;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Length range offered by the length slider.
pub const UI_LENGTH_RANGE: RangeInclusive<usize> = 6..=32;

/// Lengths outside this range are clamped before generating.
pub const LENGTH_CLAMP: RangeInclusive<usize> = 1..=256;

/// Options for password generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Requested length, clamped to [`LENGTH_CLAMP`]
    pub length: usize,
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z)
    pub include_lowercase: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include symbols from [`SYMBOLS`]
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// All classes enabled, with the given length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Length actually produced by [`generate`].
    pub fn effective_length(&self) -> usize {
        self.length.clamp(*LENGTH_CLAMP.start(), *LENGTH_CLAMP.end())
    }

    /// Characters eligible for selection.
    ///
    /// Classes are joined as lowercase, uppercase, numbers, symbols. With
    /// every class disabled the lowercase alphabet is used instead.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        if self.include_lowercase {
            alphabet.push_str(LOWERCASE);
        }
        if self.include_uppercase {
            alphabet.push_str(UPPERCASE);
        }
        if self.include_numbers {
            alphabet.push_str(NUMBERS);
        }
        if self.include_symbols {
            alphabet.push_str(SYMBOLS);
        }

        if alphabet.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("no character class selected, falling back to lowercase");
            alphabet.push_str(LOWERCASE);
        }
        alphabet
    }
}

/// Generates a password using the thread-local RNG.
///
/// # Example
/// ```
/// use pwd_trainer::{generate, GeneratorConfig};
///
/// let password = generate(&GeneratorConfig::with_length(16));
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate(config: &GeneratorConfig) -> String {
    generate_with_rng(config, &mut rand::rng())
}

/// Like [`generate`], but wrapped as a secret.
pub fn generate_secret(config: &GeneratorConfig) -> SecretString {
    SecretString::new(generate(config).into())
}

/// Generates a password drawing from `rng`. Seed the RNG for reproducible
/// output.
pub fn generate_with_rng<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> String {
    let length = config.effective_length();

    #[cfg(feature = "tracing")]
    {
        if length != config.length {
            tracing::warn!("password length {} clamped to {}", config.length, length);
        }
    }

    let chars: Vec<char> = config.alphabet().chars().collect();
    let mut password = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.random_range(0..chars.len());
        password.push(chars[idx]);
    }

    password
}
