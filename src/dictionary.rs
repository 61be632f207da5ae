//! Word list used as the membership oracle.
//!
//! A `Dictionary` is an explicit handle: the solver and the rules each borrow
//! the one they were given, so independent searches can run with different
//! word lists in the same process.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Build from any list of words. Words are upper-cased; blanks are
    /// dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Like [`new`](Dictionary::new), but rejects words with characters
    /// outside A-Z instead of keeping words that can never be played.
    pub fn try_new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checked = BTreeSet::new();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                continue;
            }
            if !is_plain_word(&word) {
                bail!("{word:?} is not a plain A-Z word");
            }
            checked.insert(word);
        }
        Ok(Self { words: checked })
    }

    /// Load a word list with one word per line. Lines starting with `#` are
    /// comments.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading dictionary {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing dictionary {}", path.display()))
    }

    /// Parse word-list text. Rejects words with characters outside A-Z.
    pub fn parse(text: &str) -> Result<Self> {
        let mut words = BTreeSet::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let word = line.to_ascii_uppercase();
            if !is_plain_word(&word) {
                bail!("line {}: {line:?} is not a plain A-Z word", lineno + 1);
            }
            words.insert(word);
        }
        Ok(Self { words })
    }

    /// Membership test. Case-sensitive on the upper-cased form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership test on raw letter bytes.
    pub fn contains_bytes(&self, word: &[u8]) -> bool {
        std::str::from_utf8(word).is_ok_and(|w| self.contains(w))
    }

    /// Words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_plain_word(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_uppercase())
}
