use dashmap::DashMap;
use uuid::Uuid;

use super::ChainEvent;

/// Destino append-only de eventos. Compartido entre runs, por eso `&self`.
pub trait EventSink: Send + Sync {
    fn record(&self, event: ChainEvent);
    /// Eventos de un run en orden de `seq`.
    fn list(&self, run_id: Uuid) -> Vec<ChainEvent>;
}

/// Descarta todo. Es el sink por defecto de una cadena.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: ChainEvent) {}
    fn list(&self, _run_id: Uuid) -> Vec<ChainEvent> { Vec::new() }
}

#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    inner: DashMap<Uuid, Vec<ChainEvent>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self { Self::default() }

    /// Runs registrados (sin orden garantizado).
    pub fn run_ids(&self) -> Vec<Uuid> { self.inner.iter().map(|e| *e.key()).collect() }
}

impl EventSink for InMemoryEventLog {
    fn record(&self, event: ChainEvent) {
        self.inner.entry(event.run_id).or_default().push(event);
    }

    fn list(&self, run_id: Uuid) -> Vec<ChainEvent> {
        self.inner.get(&run_id).map(|v| v.clone()).unwrap_or_default()
    }
}
