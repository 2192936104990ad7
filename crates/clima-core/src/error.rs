//! Centralized error types for the Clima application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages in the display locale (pt-BR)
//! - Preserves full error context for debugging/logging
//!
//! No error here is fatal to the process: every kind is caught at the flow
//! boundary and converted into a user-facing notification, except
//! persistence failures, which are only logged.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for display.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.user_message(),
            AppError::Lookup(e) => e.user_message(),
            AppError::Persistence(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Auth(e) => e.user_message(),
            AppError::Io(_) => "Uma operação de arquivo falhou. Tente novamente.",
            AppError::Other(_) => "Ocorreu um erro inesperado. Tente novamente.",
        }
    }
}

/// Input validation errors. Recoverable: the user is re-prompted.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("City name is empty")]
    EmptyCity,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyCity => "Por favor, digite uma cidade",
        }
    }
}

/// Weather lookup errors. Recoverable: the user is notified, no retry.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::CityNotFound(_) => "Cidade não encontrada",
            LookupError::Transport(_) | LookupError::InvalidResponse(_) => {
                "Não foi possível buscar os dados do clima"
            }
        }
    }
}

/// History persistence errors. Logged only; never surfaced to the user and
/// never blocking a lookup result.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("History write failed: {0}")]
    WriteFailed(String),
}

impl PersistenceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PersistenceError::WriteFailed(_) => "Não foi possível salvar o histórico",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Weather API key is not configured")]
    MissingApiKey,
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) | ConfigError::ParseError(_) => {
                "Configuração inválida. Verifique suas configurações."
            }
            ConfigError::MissingApiKey => {
                "Chave da API de clima não configurada. Verifique suas configurações."
            }
        }
    }
}

/// Authentication errors (session handling).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Session storage error: {0}")]
    StorageError(String),
}

impl AuthError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::SessionExpired => "Sua sessão expirou. Faça login novamente.",
            AuthError::NotSignedIn => "Você não está autenticado. Faça login para continuar.",
            AuthError::StorageError(_) => "Não foi possível acessar a sessão. Tente novamente.",
        }
    }
}
