use std::collections::HashMap as StdHashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::utils::split_kmers;

use super::config::TokenizerConfig;
use super::encoding::{BatchEncoding, Encoding};
use super::error::TokenizerError;
use super::utils::special_tokens::SpecialTokens;
use super::vocab::{Vocab, VocabError};

pub const DEFAULT_CONFIG_FILENAME: &str = "tokenizer.toml";
pub const DEFAULT_VOCAB_FILENAME: &str = "vocab.json";

pub struct KmerTokenizer {
    config: TokenizerConfig,
    vocab: OnceLock<Vocab>,
}

impl KmerTokenizer {
    ///
    /// Create a new tokenizer from a validated config. The vocabulary is not
    /// enumerated here; it is built once, on first use, and cached for the
    /// lifetime of the tokenizer.
    ///
    pub fn new(config: TokenizerConfig) -> Result<Self, TokenizerError> {
        config.validate()?;
        Ok(Self {
            config,
            vocab: OnceLock::new(),
        })
    }

    ///
    /// Create a new tokenizer from a TOML config file.
    ///
    pub fn from_config<P: AsRef<Path>>(cfg_path: P) -> Result<Self, TokenizerError> {
        let config = TokenizerConfig::try_from(cfg_path.as_ref())?;
        Self::new(config)
    }

    ///
    /// Restore a tokenizer from a directory written by [KmerTokenizer::save_pretrained].
    ///
    /// Both artifacts are optional: a missing `tokenizer.toml` falls back to
    /// the default config, and a missing `vocab.json` falls back to a freshly
    /// derived vocabulary. A persisted vocabulary, when present, is installed
    /// verbatim and always takes precedence over re-derivation, so artifacts
    /// enumerated under a different alphabet order keep their original IDs.
    /// A present-but-malformed artifact is a load error.
    ///
    pub fn from_pretrained<P: AsRef<Path>>(dir: P) -> Result<Self, TokenizerError> {
        let dir = dir.as_ref();

        let config_path = dir.join(DEFAULT_CONFIG_FILENAME);
        let config = if config_path.exists() {
            TokenizerConfig::try_from(config_path.as_path())?
        } else {
            TokenizerConfig::default()
        };

        let vocab = OnceLock::new();
        let vocab_path = dir.join(DEFAULT_VOCAB_FILENAME);
        if vocab_path.exists() {
            let json = fs::read_to_string(&vocab_path)?;
            let token_map: StdHashMap<String, u32> =
                serde_json::from_str(&json).map_err(VocabError::Json)?;
            let _ = vocab.set(Vocab::from_token_map(token_map)?);
        }

        Ok(Self { config, vocab })
    }

    ///
    /// Write the tokenizer to a directory: the config record as
    /// `tokenizer.toml` and the full token → ID map as `vocab.json`.
    ///
    pub fn save_pretrained<P: AsRef<Path>>(&self, dir: P) -> Result<(), TokenizerError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.config.to_file(dir.join(DEFAULT_CONFIG_FILENAME))?;

        let token_map = self.vocab().to_token_map();
        let json = serde_json::to_string_pretty(&token_map).map_err(VocabError::Json)?;
        fs::write(dir.join(DEFAULT_VOCAB_FILENAME), json)?;

        Ok(())
    }

    fn vocab(&self) -> &Vocab {
        self.vocab.get_or_init(|| {
            Vocab::new(self.config.kmerlen).expect("kmerlen is validated at construction")
        })
    }

    ///
    /// Split a sequence into k-mer tokens. Windows containing characters
    /// outside the alphabet are dropped, so the output may be shorter than
    /// the window count.
    ///
    pub fn tokenize(&self, seq: &str) -> Vec<String> {
        split_kmers(seq, self.config.kmerlen, self.config.overlapping)
            .map(|kmer| kmer.to_string())
            .collect()
    }

    ///
    /// Map tokens to IDs. Tokens absent from the vocabulary map to the
    /// unknown-token ID rather than failing.
    ///
    pub fn convert_tokens_to_ids<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        let unk_id = self.get_unk_token_id();
        tokens
            .iter()
            .map(|token| {
                self.vocab()
                    .convert_token_to_id(token.as_ref())
                    .unwrap_or(unk_id)
            })
            .collect()
    }

    ///
    /// Tokenize a sequence, map the tokens to IDs, and shape the result to
    /// exactly `maxlen` IDs: shorter outputs are right-padded with the PAD
    /// ID, longer outputs are truncated from the right. No special tokens
    /// are inserted; compose with
    /// [KmerTokenizer::build_inputs_with_special_tokens] explicitly if the
    /// downstream model expects CLS/SEP framing.
    ///
    pub fn encode(&self, seq: &str) -> Vec<u32> {
        let vocab = self.vocab();
        let unk_id = self.get_unk_token_id();
        let mut ids: Vec<u32> = split_kmers(seq, self.config.kmerlen, self.config.overlapping)
            .map(|kmer| vocab.convert_token_to_id(kmer).unwrap_or(unk_id))
            .take(self.config.maxlen)
            .collect();
        ids.resize(self.config.maxlen, self.get_pad_token_id());
        ids
    }

    ///
    /// Encode a batch of sequences. Each sequence is encoded completely
    /// independently; there is no cross-sequence interaction.
    ///
    pub fn encode_batch<S: AsRef<str>>(&self, seqs: &[S]) -> Vec<Vec<u32>> {
        seqs.iter().map(|seq| self.encode(seq.as_ref())).collect()
    }

    ///
    /// Encode a sequence and derive the attention and special-token masks
    /// alongside the IDs.
    ///
    pub fn encode_plus(&self, seq: &str) -> Encoding {
        let input_ids = self.encode(seq);
        let pad_id = self.get_pad_token_id();
        let attention_mask = input_ids.iter().map(|&id| u8::from(id != pad_id)).collect();
        let special_tokens_mask = self.get_special_tokens_mask(&input_ids);
        Encoding {
            input_ids,
            attention_mask,
            special_tokens_mask,
        }
    }

    pub fn encode_plus_batch<S: AsRef<str>>(&self, seqs: &[S]) -> BatchEncoding {
        BatchEncoding {
            encodings: seqs.iter().map(|seq| self.encode_plus(seq.as_ref())).collect(),
        }
    }

    ///
    /// Assemble already-encoded ID lists with special-token framing:
    /// `[CLS] ids_0 [SEP]` for a single input, `[CLS] ids_0 [SEP] ids_1 [SEP]`
    /// for a pair. This operates on raw ID lists and performs no maxlen
    /// shaping; the caller decides whether to wrap before or after shaping.
    ///
    pub fn build_inputs_with_special_tokens(
        &self,
        token_ids_0: &[u32],
        token_ids_1: Option<&[u32]>,
    ) -> Vec<u32> {
        let cls_id = self.get_cls_token_id();
        let sep_id = self.get_sep_token_id();

        let extra = token_ids_1.map_or(0, |ids| ids.len() + 1);
        let mut ids = Vec::with_capacity(token_ids_0.len() + 2 + extra);
        ids.push(cls_id);
        ids.extend_from_slice(token_ids_0);
        ids.push(sep_id);
        if let Some(token_ids_1) = token_ids_1 {
            ids.extend_from_slice(token_ids_1);
            ids.push(sep_id);
        }
        ids
    }

    ///
    /// Map IDs back to token strings. An ID with no entry in the vocabulary
    /// decodes to the unknown-token symbol.
    ///
    pub fn decode(&self, ids: &[u32]) -> Vec<String> {
        ids.iter()
            .map(|&id| {
                self.vocab()
                    .convert_id_to_token(id)
                    .unwrap_or(self.vocab().special_tokens.unk.clone())
            })
            .collect()
    }

    pub fn convert_token_to_id(&self, token: &str) -> Option<u32> {
        self.vocab().convert_token_to_id(token)
    }

    pub fn convert_id_to_token(&self, id: u32) -> Option<String> {
        self.vocab().convert_id_to_token(id)
    }

    pub fn convert_tokens_to_string(&self, tokens: &[String]) -> String {
        tokens.join(" ")
    }

    pub fn get_vocab_size(&self) -> usize {
        self.vocab().len()
    }

    pub fn get_vocab(&self) -> StdHashMap<String, u32> {
        self.vocab().to_token_map()
    }

    pub fn get_config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn get_unk_token(&self) -> String {
        self.vocab().special_tokens.unk.clone()
    }

    pub fn get_sep_token(&self) -> String {
        self.vocab().special_tokens.sep.clone()
    }

    pub fn get_pad_token(&self) -> String {
        self.vocab().special_tokens.pad.clone()
    }

    pub fn get_cls_token(&self) -> String {
        self.vocab().special_tokens.cls.clone()
    }

    pub fn get_mask_token(&self) -> String {
        self.vocab().special_tokens.mask.clone()
    }

    // ids
    pub fn get_unk_token_id(&self) -> u32 {
        let vocab = self.vocab();
        vocab.convert_token_to_id(&vocab.special_tokens.unk).unwrap()
    }

    pub fn get_sep_token_id(&self) -> u32 {
        let vocab = self.vocab();
        vocab.convert_token_to_id(&vocab.special_tokens.sep).unwrap()
    }

    pub fn get_pad_token_id(&self) -> u32 {
        let vocab = self.vocab();
        vocab.convert_token_to_id(&vocab.special_tokens.pad).unwrap()
    }

    pub fn get_cls_token_id(&self) -> u32 {
        let vocab = self.vocab();
        vocab.convert_token_to_id(&vocab.special_tokens.cls).unwrap()
    }

    pub fn get_mask_token_id(&self) -> u32 {
        let vocab = self.vocab();
        vocab.convert_token_to_id(&vocab.special_tokens.mask).unwrap()
    }

    ///
    /// Mark which positions of an ID sequence hold special tokens.
    ///
    pub fn get_special_tokens_mask(&self, ids: &[u32]) -> Vec<u8> {
        let special_ids = [
            self.get_unk_token_id(),
            self.get_sep_token_id(),
            self.get_pad_token_id(),
            self.get_cls_token_id(),
            self.get_mask_token_id(),
        ];
        ids.iter()
            .map(|id| u8::from(special_ids.contains(id)))
            .collect()
    }

    pub fn get_special_tokens(&self) -> &SpecialTokens {
        &self.vocab().special_tokens
    }
}
