use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 27-letter Spanish alphabet, used both for validation and for filler letters
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Minimum number of letters in a word
pub const MIN_WORD_LEN: usize = 2;

/// Check whether a character belongs to the uppercase Spanish alphabet
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// A validated, uppercase word.
///
/// Letters are kept as chars so multi-byte letters like `Ñ` index the same
/// way as ASCII ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Uppercase `raw` and validate it against `^[A-ZÑ]{2,}$`
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim().to_uppercase();
        let letters: Vec<char> = text.chars().collect();
        if letters.len() < MIN_WORD_LEN || !letters.iter().all(|&c| is_letter(c)) {
            return Err(Error::InvalidWord(raw.to_string()));
        }
        Ok(Self { text, letters })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn first_letter(&self) -> char {
        self.letters[0]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Word::new(s)
    }
}

/// Normalize and validate a whitespace-separated word list.
///
/// Tokens are uppercased and duplicates dropped, keeping the first
/// occurrence. Any invalid token rejects the whole list.
pub fn parse_wordlist(input: &str) -> Result<Vec<Word>> {
    let mut words: Vec<Word> = Vec::new();
    for token in input.split_whitespace() {
        let word = Word::new(token)?;
        if !words.contains(&word) {
            words.push(word);
        }
    }
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    Ok(words)
}

/// Validate an already-split list of tokens
pub fn wordlist_from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Word>> {
    let joined = tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    parse_wordlist(&joined)
}
