use std::future::Future;
use std::time::Duration;

use log::debug;

use super::builder::{ChainOptions, DefaultFactory, Observers};
use super::substitution::substitute;
use super::tracker::RunTracker;
use super::ChainStage;
use crate::errors::ChainError;
use crate::event::ChainEventKind;
use crate::step::{OptionalStep, Step};

/// Cadena compuesta lista para ejecutarse. Se construye con `ChainBuilder`.
///
/// Es inmutable durante la ejecución (`run(&self)`): se puede invocar
/// repetidamente y cada invocación es independiente de las anteriores.
pub struct CallChain<A, B, F>
    where A: OptionalStep,
          B: Step<Input = A::Output>
{
    pub(crate) options: ChainOptions,
    pub(crate) first: A,
    pub(crate) observers: Observers<A::Output>,
    pub(crate) default: DefaultFactory<A::Output>,
    pub(crate) second: B,
    pub(crate) reducer: F,
}

impl<A, B, F, R> CallChain<A, B, F>
    where A: OptionalStep,
          B: Step<Input = A::Output>,
          F: Fn(B::Output) -> R + Send + Sync
{
    /// Ejecuta la cadena completa y devuelve el valor reducido.
    ///
    /// Un error de cualquiera de los dos steps corta la cadena: ni los
    /// observers ni el step B corren si falla el step A.
    pub async fn run(&self, input: A::Input) -> Result<R, ChainError> {
        let mut tracker = RunTracker::start(self.options.sink.as_ref());

        let first_id = self.first.id();
        tracker.advance(ChainStage::APending, ChainEventKind::StepStarted { step_id: first_id.to_string() })?;
        let settled = match self.guarded(first_id, self.first.call(input)).await {
            Ok(v) => v,
            Err(e) => return Err(tracker.fail(first_id, e)),
        };
        tracker.advance(ChainStage::ASettled,
                        ChainEventKind::StepSettled { step_id: first_id.to_string(),
                                                      present: settled.is_some() })?;

        // Los observers ven el valor coercionado, nunca el Option.
        let (value, substituted) = substitute(settled, || (self.default)());
        for obs in &self.observers {
            obs.on_settled(&value);
        }
        tracker.emit(ChainEventKind::ObserverNotified { observers: self.observer_count() });
        tracker.advance(ChainStage::Defaulted, ChainEventKind::DefaultApplied { substituted })?;

        let second_id = self.second.id();
        tracker.advance(ChainStage::BPending, ChainEventKind::StepStarted { step_id: second_id.to_string() })?;
        let out = match self.guarded(second_id, self.second.call(value)).await {
            Ok(v) => v,
            Err(e) => return Err(tracker.fail(second_id, e)),
        };
        tracker.advance(ChainStage::BSettled,
                        ChainEventKind::StepSettled { step_id: second_id.to_string(),
                                                      present: true })?;

        let reduced = (self.reducer)(out);
        tracker.advance(ChainStage::Reduced, ChainEventKind::Reduced)?;
        tracker.advance(ChainStage::Done, ChainEventKind::ChainCompleted)?;
        debug!("chain run {} finished in stage {:?}", tracker.run_id(), tracker.stage());
        Ok(reduced)
    }

    /// Envoltorio síncrono de `run`, pensado para tests y `main`.
    ///
    /// Levanta un runtime current-thread propio. Llamarlo desde dentro de un
    /// runtime async devuelve `ChainError::Runtime` en vez de bloquear.
    pub fn block_on(&self, input: A::Input) -> Result<R, ChainError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ChainError::Runtime("block_on called from within an async runtime".into()));
        }
        let rt = tokio::runtime::Builder::new_current_thread().enable_all()
                                                              .build()
                                                              .map_err(|e| ChainError::Runtime(e.to_string()))?;
        rt.block_on(self.run(input))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    async fn guarded<T, Fut>(&self, step_id: &str, fut: Fut) -> Result<T, ChainError>
        where Fut: Future<Output = Result<T, ChainError>>
    {
        match self.options.step_timeout {
            Some(limit) => tokio::time::timeout(limit, fut).await
                                                           .map_err(|_| ChainError::Timeout { step_id: step_id.to_string(),
                                                                                              after_ms: millis(limit) })?,
            None => fut.await,
        }
    }
}

/// Milisegundos de un `Duration`, saturando en `u64::MAX`.
fn millis(limit: Duration) -> u64 {
    u64::try_from(limit.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates_instead_of_truncating() {
        assert_eq!(millis(Duration::from_millis(250)), 250);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
