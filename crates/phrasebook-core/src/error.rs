use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("key {0:?} is already loaded")]
    DuplicateKey(String),
}

pub type DictionaryResult<T> = Result<T, DictionaryError>;
