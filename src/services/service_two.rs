use async_trait::async_trait;
use chain_core::{ChainError, Step};
use log::debug;

use super::Console;
use crate::model::{ServiceOneResult, ServiceTwoResult};

#[derive(Debug, Clone)]
pub struct ServiceTwoStub {
    console: Console,
}

impl ServiceTwoStub {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Default for ServiceTwoStub {
    fn default() -> Self {
        Self::new(Console::stdout())
    }
}

/// Política numérica del servicio 2: sin valor previo -> 1, si no n + 1.
pub fn next_value(input: &ServiceOneResult) -> i32 {
    input.value().map_or(1, |n| n.wrapping_add(1))
}

#[async_trait]
impl Step for ServiceTwoStub {
    type Input = ServiceOneResult;
    type Output = ServiceTwoResult;

    fn id(&self) -> &'static str {
        "service_two"
    }

    async fn call(&self, input: ServiceOneResult) -> Result<ServiceTwoResult, ChainError> {
        self.console.line(format!("callService2 called with {input}"));
        let out = ServiceTwoResult::new(next_value(&input));
        debug!("service_two -> {out:?}");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_value_policy() {
        assert_eq!(next_value(&ServiceOneResult::Value(42)), 43);
        assert_eq!(next_value(&ServiceOneResult::Empty), 1);
        assert_eq!(next_value(&ServiceOneResult::Null), 1);
        assert_eq!(next_value(&ServiceOneResult::Value(i32::MAX)), i32::MIN);
    }

    #[test]
    fn test_call_prints_input() {
        let console = Console::capture();
        let out = tokio_test::block_on(ServiceTwoStub::new(console.clone()).call(ServiceOneResult::Empty)).unwrap();
        assert_eq!(out, ServiceTwoResult::new(1));
        assert_eq!(console.lines(), vec!["callService2 called with EmptyResult1"]);
    }
}
