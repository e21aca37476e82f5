use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("No route matches path: {path}")]
    NotFound { path: String },

    #[error("Redirect cycle detected: {}", chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },

    #[error("Duplicate route path: {path}")]
    DuplicatePath { path: String },

    #[error("Duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("Route '{from}' redirects to unknown path '{to}'")]
    DanglingRedirect { from: String, to: String },

    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("No route named: {name}")]
    UnknownRouteName { name: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// True for the one error a caller is expected to recover from at runtime
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouterError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
