//! Tipos de evento de la cadena y estructura `ChainEvent`.
//!
//! Cada invocación de `CallChain::run` emite una secuencia de eventos con
//! `seq` contiguo desde 0. El orden de los eventos es el orden real de las
//! etapas, por lo que sirve para verificar que el observer dispara antes del
//! step B.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chain::ChainStage;
use crate::errors::ChainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChainEventKind {
    /// Primer evento de toda invocación.
    ChainStarted,
    StepStarted { step_id: String },
    /// Un step se asentó con éxito. `present` es false sólo para un step
    /// opcional que no produjo resultado.
    StepSettled { step_id: String, present: bool },
    /// Los observers recibieron el valor coercionado.
    ObserverNotified { observers: usize },
    /// La sustitución por defecto quedó aplicada; `substituted` indica si
    /// realmente se usó el centinela.
    DefaultApplied { substituted: bool },
    Reduced,
    ChainCompleted,
    /// Cierre por error. Ninguna etapa posterior se ejecuta.
    ChainFailed { step_id: String, error: ChainError },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainEvent {
    pub seq: u64, // contiguo por run
    pub run_id: Uuid,
    /// Etapa alcanzada al emitir el evento.
    pub stage: ChainStage,
    pub kind: ChainEventKind,
    pub ts: DateTime<Utc>,
}
