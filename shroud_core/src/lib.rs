//! Configurable-alphabet stream cipher with length-concealing padding.
//!
//! Text is mapped to positions in a chosen alphabet, shifted by a repeating
//! key with wrap-once modular arithmetic, and optionally wrapped in a padded
//! envelope that hides the true message length behind disturbance symbols.
//! SHA-512 signatures over the plaintext allow verifying a round trip.
//!
//! The transform is a classical repeating-key substitution and should
//! **not** be used where real confidentiality is required.

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod padding;
pub mod rng;
pub mod signature;
pub mod stream;

pub use crate::alphabet::{Alphabet, AlphabetRegistry, AlphabetSpec, token};
pub use crate::cipher::{SecretKey, Shroud};
pub use crate::error::{Result, ShroudError};
pub use crate::rng::{SecureRng, derive_rng, secure_rng};
pub use crate::signature::sign;
pub use crate::stream::Direction;
