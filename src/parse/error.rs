use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    LayoutMismatch(String),
    Internal(String),
}

impl Error {
    pub fn layout_mismatch(msg: &str) -> Self {
        Self::LayoutMismatch(msg.to_string())
    }
}

impl Error {
    pub fn internal_error(msg: &str) -> Self {
        Self::Internal(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LayoutMismatch(msg) => write!(f, "Page layout changed: {msg}"),
            Self::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
