use chain_core::SettlementObserver;
use log::debug;

use super::Console;
use crate::model::ServiceOneResult;

/// Observer de la demo: imprime el resultado asentado del servicio 1.
#[derive(Debug, Clone)]
pub struct PrintObserver {
    console: Console,
}

impl PrintObserver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl SettlementObserver<ServiceOneResult> for PrintObserver {
    fn on_settled(&self, value: &ServiceOneResult) {
        debug!("service one settled with {value:?}");
        self.console.line(format!("callServicedoOnSuccess: {value}"));
    }
}
