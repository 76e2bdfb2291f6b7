use std::collections::HashMap;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use rand_core::CryptoRng;

use crate::error::{Result, ShroudError};
use crate::rng::secure_rng;

// Built-in tables. Symbol order is part of observable behavior: ciphertexts
// and tokens change if it does, so each wider table extends the previous one
// verbatim.
const TABLE_NUM: &str = "0123456789";
const TABLE_HEX: &str = "0123456789abcdef";
const TABLE_ALPHANUM: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const TABLE_ASCII_NOSPACE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const TABLE_ASCII: &str = " 0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
// DEL plus the cp1252 high range, undefined slots kept as raw C1 controls,
// then Latin-1 0xA1..=0xFF without the soft hyphen.
const TABLE_ASCIIEXT_NOSPACE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{7f}€\u{81}‚ƒ„…†‡ˆ‰Š‹Œ\u{8d}Ž\u{8f}\u{90}‘’“”•–—˜™š›œ\u{9d}žŸ¡¢£¤¥¦§¨©ª«¬®¯°±²³´µ¶·¸¹º»¼½¾¿ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞßàáâãäåæçèéêëìíîïðñòóôõö÷øùúûüýþÿ";
const TABLE_ASCIIEXT: &str = " 0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{7f}€\u{81}‚ƒ„…†‡ˆ‰Š‹Œ\u{8d}Ž\u{8f}\u{90}‘’“”•–—˜™š›œ\u{9d}žŸ¡¢£¤¥¦§¨©ª«¬®¯°±²³´µ¶·¸¹º»¼½¾¿ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞßàáâãäåæçèéêëìíîïðñòóôõö÷øùúûüýþÿ";
const TABLE_MAIL: &str = "abcdefghijklmnopqrstuvwxyz0123456789@.-_+";

/// Entry in the built-in alphabet table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlphabetSpec {
    pub name: &'static str,
    pub symbols: &'static str,
}

static BUILTIN_ALPHABETS: [AlphabetSpec; 8] = [
    AlphabetSpec {
        name: "num",
        symbols: TABLE_NUM,
    },
    AlphabetSpec {
        name: "hex",
        symbols: TABLE_HEX,
    },
    AlphabetSpec {
        name: "alphanum",
        symbols: TABLE_ALPHANUM,
    },
    AlphabetSpec {
        name: "ascii_nospace",
        symbols: TABLE_ASCII_NOSPACE,
    },
    AlphabetSpec {
        name: "ascii",
        symbols: TABLE_ASCII,
    },
    AlphabetSpec {
        name: "asciiext_nospace",
        symbols: TABLE_ASCIIEXT_NOSPACE,
    },
    AlphabetSpec {
        name: "asciiext",
        symbols: TABLE_ASCIIEXT,
    },
    AlphabetSpec {
        name: "mail",
        symbols: TABLE_MAIL,
    },
];

/// Named lookup over a fixed set of alphabet definitions.
#[derive(Clone, Copy, Debug)]
pub struct AlphabetRegistry<'a> {
    entries: &'a [AlphabetSpec],
}

impl<'a> AlphabetRegistry<'a> {
    pub const fn new(entries: &'a [AlphabetSpec]) -> Self {
        Self { entries }
    }

    pub fn builtin() -> AlphabetRegistry<'static> {
        AlphabetRegistry {
            entries: &BUILTIN_ALPHABETS,
        }
    }

    pub fn entries(&self) -> &'a [AlphabetSpec] {
        self.entries
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.iter().map(|spec| spec.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.spec(name).is_some()
    }

    pub fn spec(&self, name: &str) -> Option<&'a AlphabetSpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    /// Materializes the named alphabet.
    pub fn get(&self, name: &str) -> Result<Alphabet> {
        self.spec(name)
            .map(Alphabet::from_spec)
            .ok_or_else(|| ShroudError::UnknownAlphabet(name.to_string()))
    }
}

/// Ordered, duplicate-free symbol set with a reverse position index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    name: String,
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from caller-supplied symbols.
    ///
    /// Duplicates are dropped, keeping the first occurrence, so the reverse
    /// index stays well defined. An empty result is rejected.
    pub fn custom(name: &str, symbols: &str) -> Result<Self> {
        let mut positions = HashMap::new();
        let mut ordered = Vec::new();
        for symbol in symbols.chars() {
            if !positions.contains_key(&symbol) {
                positions.insert(symbol, ordered.len());
                ordered.push(symbol);
            }
        }
        if ordered.is_empty() {
            return Err(ShroudError::EmptyAlphabet(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            symbols: ordered,
            positions,
        })
    }

    fn from_spec(spec: &AlphabetSpec) -> Self {
        let symbols: Vec<char> = spec.symbols.chars().collect();
        let positions: HashMap<char, usize> = symbols
            .iter()
            .copied()
            .enumerate()
            .map(|(position, symbol)| (symbol, position))
            .collect();
        debug_assert_eq!(symbols.len(), positions.len(), "built-in table has duplicates");
        Self {
            name: spec.name.to_string(),
            symbols,
            positions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Position of `symbol`, or an error naming the offending character.
    pub fn position(&self, symbol: char) -> Result<usize> {
        self.positions
            .get(&symbol)
            .copied()
            .ok_or_else(|| ShroudError::SymbolNotInAlphabet {
                symbol,
                alphabet: self.name.clone(),
            })
    }

    /// Maps every character of `text` to its alphabet position.
    pub fn indices_of(&self, text: &str) -> Result<Vec<usize>> {
        text.chars().map(|symbol| self.position(symbol)).collect()
    }

    /// Renders positions back into text. Indices must lie in `[0, len)`.
    pub fn render(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&index| {
                debug_assert!(index < self.symbols.len(), "index outside alphabet");
                self.symbols[index]
            })
            .collect()
    }

    /// Secure random token of `length` symbols, drawn with replacement.
    pub fn token(&self, length: usize) -> String {
        let mut rng = secure_rng();
        self.token_with_rng(length, &mut rng)
    }

    pub fn token_with_rng<R: Rng + CryptoRng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> String {
        let dist = Uniform::from(0..self.symbols.len());
        (0..length).map(|_| self.symbols[dist.sample(rng)]).collect()
    }
}

/// Draws a secure random token from a built-in alphabet, e.g. for key material.
pub fn token(name: &str, length: usize) -> Result<String> {
    let alphabet = AlphabetRegistry::builtin().get(name)?;
    Ok(alphabet.token(length))
}
