//!
//! This module defines the `Vocab` struct, which holds the enumeration of all
//! k-mers for a given k-mer length plus the five reserved special tokens.
//! It also provides methods to convert between k-mer strings and their
//! corresponding IDs.
//!
//! The vocab is at the core of the tokenizer. It can be thought of as the
//! oracle of the tokenizer, providing the necessary information to convert
//! between k-mer strings and their corresponding IDs.
//!
use std::collections::HashMap as StdHashMap;

use fxhash::FxHashMap as HashMap;
use thiserror::Error;

use crate::utils::special_tokens::{NUM_SPECIAL_TOKENS, SpecialTokens};

/// Canonical alphabet in enumeration order. This order fixes the ID assignment
/// of every k-mer and therefore persisted-model compatibility; it must never
/// change. A vocabulary enumerated under a different order can still be used
/// by restoring its persisted token map, which always takes precedence over
/// re-derivation.
pub const ALPHABET: [u8; 4] = *b"ACTG";

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("k-mer length must be at least 1")]
    InvalidKmerLength,
    #[error("Duplicate ID {0} in vocabulary")]
    DuplicateId(u32),
    #[error("Token `{0}` has ID {1}, which crosses the reserved special-token range")]
    SpecialTokenCollision(String, u32),
    #[error("Special token `{0}` missing from vocabulary")]
    MissingSpecialToken(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vocab {
    /// All k-mers in enumeration (ID) order, special tokens excluded.
    pub kmers: Vec<String>,
    pub token_to_id: HashMap<String, u32>,
    pub id_to_token: HashMap<u32, String>,
    pub special_tokens: SpecialTokens,
}

/// Enumerate all 4^k strings of length k in product order over [ALPHABET]:
/// the leftmost position varies slowest, so for k = 2 the order is
/// AA, AC, AT, AG, CA, ...
fn enumerate_kmers(kmerlen: usize) -> Vec<String> {
    let mut kmers = vec![String::new()];
    for _ in 0..kmerlen {
        kmers = kmers
            .iter()
            .flat_map(|prefix| {
                ALPHABET.iter().map(move |&base| {
                    let mut kmer = String::with_capacity(kmerlen);
                    kmer.push_str(prefix);
                    kmer.push(base as char);
                    kmer
                })
            })
            .collect();
    }
    kmers
}

impl Vocab {
    ///
    /// Build the full vocabulary for a given k-mer length: all 4^k k-mers with
    /// contiguous IDs starting at [NUM_SPECIAL_TOKENS], preceded by the five
    /// reserved special tokens at IDs 0 through 4.
    ///
    /// # Arguments:
    /// - `kmerlen`: the k-mer length; must be at least 1
    ///
    pub fn new(kmerlen: usize) -> Result<Self, VocabError> {
        if kmerlen == 0 {
            return Err(VocabError::InvalidKmerLength);
        }

        let special_tokens = SpecialTokens::default();
        let kmers = enumerate_kmers(kmerlen);

        let mut token_to_id: HashMap<String, u32> = HashMap::default();
        let mut id_to_token: HashMap<u32, String> = HashMap::default();

        let special_map: StdHashMap<String, u32> = (&special_tokens).into();
        for (token, id) in special_map {
            token_to_id.insert(token.clone(), id);
            id_to_token.insert(id, token);
        }

        for (i, kmer) in kmers.iter().enumerate() {
            let id = NUM_SPECIAL_TOKENS + i as u32;
            token_to_id.insert(kmer.clone(), id);
            id_to_token.insert(id, kmer.clone());
        }

        Ok(Vocab {
            kmers,
            token_to_id,
            id_to_token,
            special_tokens,
        })
    }

    ///
    /// Reconstruct a vocabulary from a persisted token → ID map. The map is
    /// installed verbatim; nothing is re-derived from the alphabet, so maps
    /// produced under a different enumeration order keep their original IDs.
    ///
    /// The map is rejected if any ID appears twice, if any of the five special
    /// tokens is absent, or if the reserved ID range [0, 5) and the k-mer ID
    /// range overlap.
    ///
    pub fn from_token_map(map: StdHashMap<String, u32>) -> Result<Self, VocabError> {
        let special_tokens = SpecialTokens::default();
        let special_names: Vec<String> = (&special_tokens).into();

        let mut token_to_id: HashMap<String, u32> = HashMap::default();
        let mut id_to_token: HashMap<u32, String> = HashMap::default();

        for (token, id) in map {
            if id_to_token.insert(id, token.clone()).is_some() {
                return Err(VocabError::DuplicateId(id));
            }
            token_to_id.insert(token, id);
        }

        for name in &special_names {
            match token_to_id.get(name) {
                None => return Err(VocabError::MissingSpecialToken(name.clone())),
                Some(&id) if id >= NUM_SPECIAL_TOKENS => {
                    return Err(VocabError::SpecialTokenCollision(name.clone(), id));
                }
                Some(_) => {}
            }
        }

        for (token, &id) in token_to_id.iter() {
            if id < NUM_SPECIAL_TOKENS && !special_names.contains(token) {
                return Err(VocabError::SpecialTokenCollision(token.clone(), id));
            }
        }

        // keep the k-mers ordered by ID so enumeration order survives the round trip
        let mut kmers_by_id: Vec<(u32, String)> = token_to_id
            .iter()
            .filter(|(token, _)| !special_names.contains(*token))
            .map(|(token, &id)| (id, token.clone()))
            .collect();
        kmers_by_id.sort_unstable_by_key(|(id, _)| *id);
        let kmers = kmers_by_id.into_iter().map(|(_, token)| token).collect();

        Ok(Vocab {
            kmers,
            token_to_id,
            id_to_token,
            special_tokens,
        })
    }

    ///
    /// Convert a k-mer or special-token string to its corresponding ID.
    /// # Arguments:
    /// - `token`: the token string to convert
    /// # Returns:
    /// - `Option<u32>`: the ID corresponding to the token, or None if it doesn't exist
    ///
    pub fn convert_token_to_id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    ///
    /// Convert an ID to its corresponding token string.
    ///
    /// # Arguments:
    /// - `id`: the ID to convert
    /// # Returns:
    /// - `Option<String>`: the token corresponding to the ID, or None if it doesn't exist
    ///
    pub fn convert_id_to_token(&self, id: u32) -> Option<String> {
        self.id_to_token.get(&id).cloned()
    }

    ///
    /// Get the number of tokens in the vocabulary, special tokens included.
    ///
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    ///
    /// Check if the vocabulary is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    ///
    /// Check if a token exists in the vocabulary.
    ///
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    ///
    /// Get the full token → ID map, specials included, as a plain [StdHashMap].
    /// This is the persisted representation.
    ///
    pub fn to_token_map(&self) -> StdHashMap<String, u32> {
        self.token_to_id
            .iter()
            .map(|(token, &id)| (token.clone(), id))
            .collect()
    }
}
