use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("state not found: {type_name}")]
    StateNotFound { type_name: &'static str },
}

impl Error {
    pub fn state_not_found(type_name: &'static str) -> Self {
        Self::StateNotFound { type_name }
    }
}
