// src/infra/errors.rs — Error types for ToolNest

use thiserror::Error;

use crate::auth::AuthError;
use crate::billing::BillingError;
use crate::tools::ProcessingError;

#[derive(Error, Debug)]
pub enum ToolNestError {
    // Collaborator errors (caller decides whether to retry)
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Billing(#[from] BillingError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    // User errors
    #[error("Not signed in. Sign in before using tools.")]
    NotLoggedIn,

    /// A logout landed while the request was in flight; its result was dropped.
    #[error("Signed out before the request finished.")]
    SessionEnded,

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolNestError {
    pub fn is_retriable(&self) -> bool {
        match self {
            ToolNestError::Auth(e) => e.is_retriable(),
            ToolNestError::Billing(e) => e.is_retriable(),
            ToolNestError::Processing(e) => e.is_retriable(),
            _ => false,
        }
    }
}
