//! Runner de la cadena de dos steps.
//!
//! Composición (en orden estricto por invocación):
//! 1. step A (`OptionalStep`) produce `Option<T>`;
//! 2. el valor se coerciona con el default declarado y los observers lo reciben;
//! 3. la sustitución queda registrada (`Defaulted`);
//! 4. step B (`Step`) consume el valor y produce exactamente un resultado;
//! 5. el reducer extrae el valor plano.
//!
//! `CallChain::run` devuelve el futuro de la cadena completa; `block_on` es un
//! envoltorio síncrono para tests y `main`.

mod builder;
mod runner;
mod stage;
mod substitution;
mod tracker;

pub use builder::{ChainBuilder, DefaultedStage, FirstStage, ThenStage};
pub use runner::CallChain;
pub use stage::ChainStage;
pub use substitution::default_if_empty;
