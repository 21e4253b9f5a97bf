use async_trait::async_trait;
use chain_core::{ChainError, OptionalStep};
use log::debug;

use super::Console;
use crate::model::{Params, ServiceOneResult};

/// Valor fijo que devuelve el stub cuando `Params.value` es true.
pub const SERVICE_ONE_ANSWER: i32 = 42;

#[derive(Debug, Clone)]
pub struct ServiceOneStub {
    console: Console,
}

impl ServiceOneStub {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Default for ServiceOneStub {
    fn default() -> Self {
        Self::new(Console::stdout())
    }
}

#[async_trait]
impl OptionalStep for ServiceOneStub {
    type Input = Params;
    type Output = ServiceOneResult;

    fn id(&self) -> &'static str {
        "service_one"
    }

    async fn call(&self, params: Params) -> Result<Option<ServiceOneResult>, ChainError> {
        self.console.line(format!("callService1 called with {params}"));
        let out = params.value.then_some(ServiceOneResult::Value(SERVICE_ONE_ANSWER));
        debug!("service_one -> {out:?}");
        Ok(out)
    }
}
