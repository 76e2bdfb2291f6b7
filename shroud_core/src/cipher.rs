use std::fmt;

use log::debug;
use rand::Rng;
use rand_core::CryptoRng;
use zeroize::Zeroizing;

use crate::alphabet::{Alphabet, AlphabetRegistry};
use crate::error::{Result, ShroudError};
use crate::padding;
use crate::rng::secure_rng;
use crate::signature;
use crate::stream::{self, Direction};

/// Key material as alphabet indices, wiped on drop.
pub struct SecretKey {
    indices: Zeroizing<Vec<usize>>,
}

impl SecretKey {
    /// Derives key indices from `key` under `alphabet`.
    ///
    /// An empty key is rejected here so the repeating key stream always has
    /// at least one step.
    pub fn derive(alphabet: &Alphabet, key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(ShroudError::EmptyKey);
        }
        let indices = alphabet.indices_of(key)?;
        Ok(Self {
            indices: Zeroizing::new(indices),
        })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.indices.len())
            .finish_non_exhaustive()
    }
}

/// Cipher facade pairing an alphabet with a derived key.
///
/// Every operation recomputes its buffers from scratch; the only state kept
/// between calls is the most recent signature and rendered output, which
/// back [`Shroud::signature`] and [`Shroud::verify`].
#[derive(Debug)]
pub struct Shroud {
    alphabet: Alphabet,
    key: SecretKey,
    signature: Option<String>,
    rendered: Option<String>,
}

impl Shroud {
    /// Builds a cipher over a built-in alphabet.
    pub fn new(alphabet_name: &str, key: &str) -> Result<Self> {
        let alphabet = AlphabetRegistry::builtin().get(alphabet_name)?;
        Self::with_alphabet(alphabet, key)
    }

    /// Builds a cipher over a caller-supplied alphabet.
    pub fn with_alphabet(alphabet: Alphabet, key: &str) -> Result<Self> {
        let key = SecretKey::derive(&alphabet, key)?;
        Ok(Self {
            alphabet,
            key,
            signature: None,
            rendered: None,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Signature stored by the most recent signing operation, if any.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Transforms `text` forward under the repeating key.
    pub fn encode(&mut self, text: &str) -> Result<String> {
        self.apply(text, Direction::Forward)
    }

    /// Like [`Shroud::encode`], also storing and returning the plaintext
    /// signature.
    pub fn encode_signed(&mut self, text: &str) -> Result<(String, String)> {
        let signature = signature::sign(text);
        let rendered = self.apply(text, Direction::Forward)?;
        self.signature = Some(signature.clone());
        Ok((rendered, signature))
    }

    /// Reverses [`Shroud::encode`].
    ///
    /// A wrong key or alphabet still yields a string, just not the original
    /// one; only out-of-alphabet input is an error.
    pub fn decode(&mut self, text: &str) -> Result<String> {
        self.apply(text, Direction::Reverse)
    }

    /// Pads `text` to exactly `target_len` symbols, then transforms forward.
    pub fn wencode(&mut self, text: &str, target_len: usize) -> Result<String> {
        let mut rng = secure_rng();
        self.wencode_with_rng(text, target_len, &mut rng)
    }

    pub fn wencode_with_rng<R: Rng + CryptoRng + ?Sized>(
        &mut self,
        text: &str,
        target_len: usize,
        rng: &mut R,
    ) -> Result<String> {
        if text.is_empty() {
            return Err(ShroudError::EmptyText);
        }
        let len = text.chars().count();
        if target_len <= len + 2 {
            return Err(ShroudError::TargetTooSmall {
                target: target_len,
                len,
            });
        }
        if self.alphabet.len() < 2 {
            return Err(ShroudError::AlphabetTooSmall {
                name: self.alphabet.name().to_string(),
                len: self.alphabet.len(),
            });
        }
        let mut buffer = self.alphabet.indices_of(text)?;
        padding::wide(&mut buffer, target_len, self.alphabet.len(), rng);
        stream::transform(
            &mut buffer,
            self.key.indices(),
            self.alphabet.len(),
            Direction::Forward,
        );
        let rendered = self.alphabet.render(&buffer);
        debug!(
            "wencode alphabet={} payload={} target={}",
            self.alphabet.name(),
            len,
            target_len
        );
        self.rendered = Some(rendered.clone());
        Ok(rendered)
    }

    /// Like [`Shroud::wencode`], also storing and returning the plaintext
    /// signature.
    pub fn wencode_signed(&mut self, text: &str, target_len: usize) -> Result<(String, String)> {
        let mut rng = secure_rng();
        self.wencode_signed_with_rng(text, target_len, &mut rng)
    }

    pub fn wencode_signed_with_rng<R: Rng + CryptoRng + ?Sized>(
        &mut self,
        text: &str,
        target_len: usize,
        rng: &mut R,
    ) -> Result<(String, String)> {
        let signature = signature::sign(text);
        let rendered = self.wencode_with_rng(text, target_len, rng)?;
        self.signature = Some(signature.clone());
        Ok((rendered, signature))
    }

    /// Reverses [`Shroud::wencode`].
    ///
    /// A key or alphabet mismatch is not an error: the envelope markers are
    /// then missing and the result is `Ok("")`, or garbage when a
    /// coincidental marker pair survives the reverse transform.
    pub fn wdecode(&mut self, text: &str) -> Result<String> {
        let mut buffer = self.alphabet.indices_of(text)?;
        stream::transform(
            &mut buffer,
            self.key.indices(),
            self.alphabet.len(),
            Direction::Reverse,
        );
        let payload = padding::unwide(buffer);
        let rendered = self.alphabet.render(&payload);
        debug!(
            "wdecode alphabet={} padded={} recovered={}",
            self.alphabet.name(),
            text.chars().count(),
            payload.len()
        );
        self.rendered = Some(rendered.clone());
        Ok(rendered)
    }

    /// Checks `candidate` against the digest of the most recent output.
    ///
    /// `false` until some operation has rendered output.
    pub fn verify(&self, candidate: &str) -> bool {
        match &self.rendered {
            Some(rendered) => signature::matches(rendered, candidate),
            None => false,
        }
    }

    fn apply(&mut self, text: &str, direction: Direction) -> Result<String> {
        let mut buffer = self.alphabet.indices_of(text)?;
        stream::transform(
            &mut buffer,
            self.key.indices(),
            self.alphabet.len(),
            direction,
        );
        let rendered = self.alphabet.render(&buffer);
        debug!(
            "{:?} pass alphabet={} chars={}",
            direction,
            self.alphabet.name(),
            buffer.len()
        );
        self.rendered = Some(rendered.clone());
        Ok(rendered)
    }
}
