//! callchain-sandbox
//!
//! Demo de una cadena de dos llamadas asíncronas donde la primera puede no
//! devolver nada y la segunda debe correr igual:
//! - `model`: parámetros y resultados de los servicios simulados.
//! - `services`: stubs de los servicios, consola y observer de la demo.
//! - `demo`: composición de la cadena sobre `chain-core`.
//! - `config`, `logging`, `errors`: piezas transversales del binario.

pub mod config;
pub mod demo;
pub mod errors;
pub mod logging;
pub mod model;
pub mod services;

pub use demo::{build_demo_chain, run_demo, run_demo_blocking, DemoChain};
pub use errors::CoreError;
pub use model::{Params, ServiceOneResult, ServiceTwoResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainConfig;
    use crate::services::Console;
    use chain_core::NoopEventSink;
    use std::sync::Arc;

    #[test]
    fn demo_chain_true_branch() {
        let chain = build_demo_chain(Console::capture(), &ChainConfig::default(), Arc::new(NoopEventSink));
        assert_eq!(run_demo_blocking(&chain, Params::new(true)).unwrap(), 43);
    }

    #[test]
    fn demo_chain_false_branch() {
        let chain = build_demo_chain(Console::capture(), &ChainConfig::default(), Arc::new(NoopEventSink));
        assert_eq!(run_demo_blocking(&chain, Params::new(false)).unwrap(), 1);
    }
}
