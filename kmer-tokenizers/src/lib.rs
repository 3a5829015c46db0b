//! # kmer-tokenizers
//!
//! Deterministic k-mer tokenizers for nucleotide sequences.
//!
//! ## Purpose
//!
//! This crate converts raw nucleotide sequences over the {A,C,T,G} alphabet
//! into fixed-length integer ID arrays for machine learning pipelines. A
//! sequence is split into fixed-length substrings (k-mers), each k-mer is
//! mapped to an ID through an enumerated vocabulary, and the ID sequence is
//! padded or truncated to a configured length.
//!
//! ## Design Philosophy
//!
//! The vocabulary is a pure function of the k-mer length: all 4^k k-mers in a
//! fixed enumeration order, with IDs starting after five reserved special
//! tokens ([UNK], [SEP], [PAD], [CLS], [MASK] at IDs 0 through 4). It is
//! built at most once per tokenizer and never mutated afterwards, so a
//! tokenizer can be shared read-only across threads. K-mers containing
//! characters outside the alphabet are dropped during splitting, never mapped
//! to [UNK].
//!
//! ## Main Components
//!
//! - **`KmerTokenizer`**: splits, encodes, decodes, and persists
//! - **`Vocab`**: the k-mer vocabulary and token ↔ ID maps
//! - **`TokenizerConfig`**: k-mer length, splitting mode, output length
//!
//! ## Example
//!
//! ```rust
//! use kmer_tokenizers::{KmerTokenizer, TokenizerConfig};
//!
//! let config = TokenizerConfig::new(2, true, 8).unwrap();
//! let tokenizer = KmerTokenizer::new(config).unwrap();
//!
//! // the GN window is dropped; the rest is padded out to maxlen
//! let ids = tokenizer.encode("ACTGN");
//! assert_eq!(ids.len(), 8);
//! assert_eq!(&ids[..3], &[6, 11, 16]);
//! ```
//!
pub mod config;
pub mod encoding;
pub mod error;
pub mod tokenizer;
pub mod utils;
pub mod vocab;

// re-export things
pub use config::*;
pub use encoding::*;
pub use error::*;
pub use tokenizer::*;
pub use utils::*;
pub use vocab::*;
