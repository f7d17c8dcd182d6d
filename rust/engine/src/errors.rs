use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Malformed card token: {token}")]
    MalformedCard { token: String },
    #[error("A hand takes exactly 5 distinct cards, got {count}")]
    WrongHandSize { count: usize },
}
