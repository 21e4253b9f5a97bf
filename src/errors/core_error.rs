use chain_core::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en la cadena: {0}")]
    Chain(#[from] ChainError),
}
