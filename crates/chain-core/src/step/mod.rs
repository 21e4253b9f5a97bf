//! Definiciones relacionadas a Steps.
//!
//! Una cadena tiene exactamente dos steps asíncronos:
//! - `OptionalStep`: produce cero o un resultado (step A).
//! - `Step`: consume la salida (posiblemente sustituida) del anterior y
//!   produce siempre un resultado (step B).
//!
//! Los observers (`SettlementObserver`) se enganchan al asentamiento del
//! step A y sólo producen efectos laterales.

mod definition;
mod observer;

pub use definition::{OptionalStep, Step};
pub use observer::SettlementObserver;
