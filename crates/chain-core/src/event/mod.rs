//! Eventos de ejecución de una cadena y trait EventSink.

mod store;
mod types;

pub use store::{EventSink, InMemoryEventLog, NoopEventSink};
pub use types::{ChainEvent, ChainEventKind};
