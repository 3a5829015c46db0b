use std::fs::read_to_string;
use std::path::Path;

use thiserror::Error;

use serde::{Deserialize, Serialize};

pub const DEFAULT_KMERLEN: usize = 6;
pub const DEFAULT_OVERLAPPING: bool = true;
pub const DEFAULT_MAXLEN: usize = 400;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizerConfig {
    pub kmerlen: usize,
    pub overlapping: bool,
    pub maxlen: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            kmerlen: DEFAULT_KMERLEN,
            overlapping: DEFAULT_OVERLAPPING,
            maxlen: DEFAULT_MAXLEN,
        }
    }
}

#[derive(Error, Debug)]
pub enum TokenizerConfigError {
    #[error("k-mer length must be at least 1")]
    InvalidKmerLength,
    #[error("maxlen must be at least 1")]
    InvalidMaxLen,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

pub type TokenizerConfigResult<T> = std::result::Result<T, TokenizerConfigError>;

impl TokenizerConfig {
    ///
    /// Create a new, validated config.
    /// # Arguments
    /// * `kmerlen` - the k-mer length; must be at least 1
    /// * `overlapping` - sliding-window (stride 1) vs block (stride k) splitting
    /// * `maxlen` - fixed output length for encoded sequences; must be at least 1
    ///
    pub fn new(kmerlen: usize, overlapping: bool, maxlen: usize) -> TokenizerConfigResult<Self> {
        let config = TokenizerConfig {
            kmerlen,
            overlapping,
            maxlen,
        };
        config.validate()?;
        Ok(config)
    }

    ///
    /// Reject configs that would produce degenerate tokenizers. Values are
    /// never coerced; a zero k-mer length or maxlen is an error.
    ///
    pub fn validate(&self) -> TokenizerConfigResult<()> {
        if self.kmerlen == 0 {
            return Err(TokenizerConfigError::InvalidKmerLength);
        }
        if self.maxlen == 0 {
            return Err(TokenizerConfigError::InvalidMaxLen);
        }
        Ok(())
    }

    ///
    /// Write the config to a TOML file.
    ///
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> TokenizerConfigResult<()> {
        let toml_str = toml::to_string(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

impl TryFrom<&Path> for TokenizerConfig {
    type Error = TokenizerConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: TokenizerConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_default_config() {
        let config = TokenizerConfig::default();
        assert_eq!(config.kmerlen, 6);
        assert_eq!(config.overlapping, true);
        assert_eq!(config.maxlen, 400);
    }

    #[rstest]
    fn test_rejects_zero_kmerlen() {
        let config = TokenizerConfig::new(0, true, 400);
        assert!(matches!(
            config,
            Err(TokenizerConfigError::InvalidKmerLength)
        ));
    }

    #[rstest]
    fn test_rejects_zero_maxlen() {
        let config = TokenizerConfig::new(6, true, 0);
        assert!(matches!(config, Err(TokenizerConfigError::InvalidMaxLen)));
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("tests/data/tokenizer.toml");
        let config = TokenizerConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.kmerlen, 4);
        assert_eq!(config.overlapping, false);
        assert_eq!(config.maxlen, 128);
    }

    #[rstest]
    fn test_try_from_toml_partial_falls_back_to_defaults() {
        let path = PathBuf::from("tests/data/tokenizer_partial.toml");
        let config = TokenizerConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.kmerlen, 3);
        assert_eq!(config.overlapping, true);
        assert_eq!(config.maxlen, 400);
    }

    #[rstest]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.toml");

        let config = TokenizerConfig::new(5, false, 256).unwrap();
        config.to_file(&path).unwrap();

        let restored = TokenizerConfig::try_from(path.as_path()).unwrap();
        assert_eq!(restored, config);
    }

    #[rstest]
    fn test_try_from_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.toml");
        std::fs::write(&path, "kmerlen = \"six\"").unwrap();

        let result = TokenizerConfig::try_from(path.as_path());
        assert!(matches!(result, Err(TokenizerConfigError::Toml(_))));
    }
}
