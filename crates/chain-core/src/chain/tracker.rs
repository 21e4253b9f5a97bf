use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use super::ChainStage;
use crate::errors::ChainError;
use crate::event::{ChainEvent, ChainEventKind, EventSink};

/// Estado de una invocación: etapa actual + numeración de eventos.
pub(crate) struct RunTracker<'a> {
    run_id: Uuid,
    stage: ChainStage,
    next_seq: u64,
    sink: &'a dyn EventSink,
}

impl<'a> RunTracker<'a> {
    /// Abre un run nuevo y emite `ChainStarted`.
    pub(crate) fn start(sink: &'a dyn EventSink) -> Self {
        let mut t = Self { run_id: Uuid::new_v4(),
                           stage: ChainStage::Start,
                           next_seq: 0,
                           sink };
        debug!("chain run {} started", t.run_id);
        t.emit(ChainEventKind::ChainStarted);
        t
    }

    pub(crate) fn run_id(&self) -> Uuid { self.run_id }

    pub(crate) fn stage(&self) -> ChainStage { self.stage }

    /// Registra un evento en la etapa actual, sin transicionar.
    pub(crate) fn emit(&mut self, kind: ChainEventKind) {
        let ev = ChainEvent { seq: self.next_seq,
                              run_id: self.run_id,
                              stage: self.stage,
                              kind,
                              ts: Utc::now() };
        self.next_seq += 1;
        self.sink.record(ev);
    }

    pub(crate) fn advance(&mut self, next: ChainStage, kind: ChainEventKind) -> Result<(), ChainError> {
        if !self.stage.can_transition_to(next) {
            return Err(ChainError::InvalidTransition { from: self.stage, to: next });
        }
        debug!("chain run {}: {:?} -> {:?}", self.run_id, self.stage, next);
        self.stage = next;
        self.emit(kind);
        Ok(())
    }

    /// Cierra el run como fallido y devuelve el error para propagarlo.
    pub(crate) fn fail(&mut self, step_id: &str, error: ChainError) -> ChainError {
        warn!("chain run {} failed at step '{}': {}", self.run_id, step_id, error);
        let kind = ChainEventKind::ChainFailed { step_id: step_id.to_string(), error: error.clone() };
        if self.stage.can_transition_to(ChainStage::Failed) {
            self.stage = ChainStage::Failed;
        }
        self.emit(kind);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InMemoryEventLog;

    #[test]
    fn start_emits_first_event_with_seq_zero() {
        let log = InMemoryEventLog::new();
        let t = RunTracker::start(&log);
        let events = log.list(t.run_id());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].seq, 0);
        assert_eq!(events[0].kind, ChainEventKind::ChainStarted);
        assert_eq!(t.stage(), ChainStage::Start);
    }

    #[test]
    fn advance_rejects_skips_without_emitting() {
        let log = InMemoryEventLog::new();
        let mut t = RunTracker::start(&log);
        let err = t.advance(ChainStage::BPending, ChainEventKind::Reduced).unwrap_err();
        assert_eq!(err, ChainError::InvalidTransition { from: ChainStage::Start, to: ChainStage::BPending });
        assert_eq!(log.list(t.run_id()).len(), 1);
        assert_eq!(t.stage(), ChainStage::Start);
    }

    #[test]
    fn fail_from_pending_moves_to_failed() {
        let log = InMemoryEventLog::new();
        let mut t = RunTracker::start(&log);
        t.advance(ChainStage::APending, ChainEventKind::StepStarted { step_id: "a".into() }).unwrap();
        let e = t.fail("a", ChainError::transport("down"));
        assert_eq!(e, ChainError::Transport("down".into()));
        assert_eq!(t.stage(), ChainStage::Failed);
        let last = log.list(t.run_id()).pop().unwrap();
        assert_eq!(last.stage, ChainStage::Failed);
        assert_eq!(last.seq, 2);
    }
}
