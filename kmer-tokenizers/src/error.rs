use thiserror::Error;

use super::config::TokenizerConfigError;
use super::vocab::VocabError;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] TokenizerConfigError),
    #[error("Vocabulary error: {0}")]
    Vocab(#[from] VocabError),
}
