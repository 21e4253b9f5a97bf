use serde::{Deserialize, Serialize};

/// Etapa de una invocación de la cadena.
///
/// Transiciones válidas:
/// `Start -> APending -> ASettled -> Defaulted -> BPending -> BSettled -> Reduced -> Done`,
/// más `APending -> Failed` y `BPending -> Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainStage {
    Start,
    /// Step A en curso.
    APending,
    /// Step A asentado (con o sin valor). Aquí disparan los observers.
    ASettled,
    /// El valor para step B ya no puede estar ausente.
    Defaulted,
    BPending,
    BSettled,
    Reduced,
    Done,
    Failed,
}

impl ChainStage {
    pub fn can_transition_to(self, next: ChainStage) -> bool {
        use ChainStage::*;
        matches!((self, next),
                 (Start, APending)
                 | (APending, ASettled)
                 | (ASettled, Defaulted)
                 | (Defaulted, BPending)
                 | (BPending, BSettled)
                 | (BSettled, Reduced)
                 | (Reduced, Done)
                 | (APending, Failed)
                 | (BPending, Failed))
    }
}
