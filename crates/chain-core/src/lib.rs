//! chain-core: runner de cadenas asíncronas de dos steps con resultado opcional.
pub mod chain;
pub mod errors;
pub mod event;
pub mod step;

pub use chain::{default_if_empty, CallChain, ChainBuilder, ChainStage};
pub use errors::ChainError;
pub use event::{ChainEvent, ChainEventKind, EventSink, InMemoryEventLog, NoopEventSink};
pub use step::{OptionalStep, SettlementObserver, Step};
