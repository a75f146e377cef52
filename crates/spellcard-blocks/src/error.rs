//! Error types for spellcard-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Expected '{{' at byte {offset}")]
    ExpectedBrace { offset: usize },

    #[error("Unclosed '{{' opened at byte {offset}")]
    UnclosedBrace { offset: usize },
}
