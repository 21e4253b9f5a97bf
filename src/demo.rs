//! Cadena de la demo: servicio 1 -> observer -> default -> servicio 2 -> entero.
use std::sync::Arc;

use chain_core::{CallChain, ChainBuilder, EventSink};

use crate::config::ChainConfig;
use crate::errors::CoreError;
use crate::model::{Params, ServiceOneResult, ServiceTwoResult};
use crate::services::{Console, PrintObserver, ServiceOneStub, ServiceTwoStub};

/// Reducer terminal de la demo.
pub type Reducer = fn(ServiceTwoResult) -> i32;

pub type DemoChain = CallChain<ServiceOneStub, ServiceTwoStub, Reducer>;

pub fn extract_result(out: ServiceTwoResult) -> i32 {
    out.result
}

/// Arma la cadena de la demo. Todas las etapas escriben en `console`.
pub fn build_demo_chain(console: Console, config: &ChainConfig, sink: Arc<dyn EventSink>) -> DemoChain {
    ChainBuilder::new().with_event_sink(sink)
                       .with_step_timeout(config.step_timeout())
                       .first(ServiceOneStub::new(console.clone()))
                       .observe(PrintObserver::new(console.clone()))
                       .default_if_empty(ServiceOneResult::Empty)
                       .then(ServiceTwoStub::new(console))
                       .reduce(extract_result as Reducer)
}

pub async fn run_demo(chain: &DemoChain, params: Params) -> Result<i32, CoreError> {
    Ok(chain.run(params).await?)
}

/// Versión bloqueante para `main`. No usar dentro de un runtime async.
pub fn run_demo_blocking(chain: &DemoChain, params: Params) -> Result<i32, CoreError> {
    Ok(chain.block_on(params)?)
}
