//! Errores del runner de cadenas.
//!
//! Cualquier variante que salga de un step corta la cadena: las etapas
//! restantes (observer, sustitución por defecto, step B, reducer) no se
//! ejecutan y el error llega tal cual a `run` / `block_on`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain::ChainStage;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ChainError {
    #[error("transport failure: {0}")] Transport(String),
    #[error("step '{step_id}' timed out after {after_ms} ms")] Timeout { step_id: String, after_ms: u64 },
    #[error("invalid stage transition {from:?} -> {to:?}")] InvalidTransition { from: ChainStage, to: ChainStage },
    #[error("runtime: {0}")] Runtime(String),
}

impl ChainError {
    /// Atajo para construir un `Transport` desde cualquier cosa imprimible.
    pub fn transport(msg: impl Into<String>) -> Self {
        ChainError::Transport(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_step() {
        let e = ChainError::Timeout { step_id: "service_one".into(), after_ms: 250 };
        assert_eq!(e.to_string(), "step 'service_one' timed out after 250 ms");
    }

    #[test]
    fn invalid_transition_message() {
        let e = ChainError::InvalidTransition { from: ChainStage::Start, to: ChainStage::Done };
        assert_eq!(e.to_string(), "invalid stage transition Start -> Done");
    }
}
