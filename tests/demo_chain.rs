use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use callchain_sandbox::config::ChainConfig;
use callchain_sandbox::services::{Console, PrintObserver, ServiceOneStub, ServiceTwoStub};
use callchain_sandbox::{build_demo_chain, run_demo, run_demo_blocking, Params, ServiceOneResult};
use chain_core::{ChainBuilder, ChainEventKind, EventSink, InMemoryEventLog, NoopEventSink};

fn transcript_for(value: bool) -> (i32, Vec<String>) {
    let console = Console::capture();
    let chain = build_demo_chain(console.clone(), &ChainConfig::default(), Arc::new(NoopEventSink));
    let out = run_demo_blocking(&chain, Params::new(value)).expect("chain ok");
    (out, console.lines())
}

#[test]
fn scenario_value_true() {
    let (out, lines) = transcript_for(true);
    assert_eq!(out, 43);
    assert_eq!(lines,
               vec!["callService1 called with Params: true",
                    "callServicedoOnSuccess: Result1: 42",
                    "callService2 called with Result1: 42"]);
}

#[test]
fn scenario_value_false() {
    let (out, lines) = transcript_for(false);
    assert_eq!(out, 1);
    assert_eq!(lines,
               vec!["callService1 called with Params: false",
                    "callServicedoOnSuccess: EmptyResult1",
                    "callService2 called with EmptyResult1"]);
}

#[test]
fn observer_sees_sentinel_exactly_once() {
    for (value, expected) in [(true, ServiceOneResult::Value(42)), (false, ServiceOneResult::Empty)] {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let console = Console::capture();
        let chain = ChainBuilder::new().first(ServiceOneStub::new(console.clone()))
                                       .observe(move |r: &ServiceOneResult| {
                                           assert_eq!(*r, expected);
                                           c.fetch_add(1, Ordering::SeqCst);
                                       })
                                       .default_if_empty(ServiceOneResult::Empty)
                                       .then(ServiceTwoStub::new(console))
                                       .reduce(|r| r.result);
        chain.block_on(Params::new(value)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1, "value={value}");
    }
}

#[test]
fn running_twice_gives_identical_output() {
    let console = Console::capture();
    let chain = build_demo_chain(console.clone(), &ChainConfig::default(), Arc::new(NoopEventSink));
    for value in [true, false] {
        let a = run_demo_blocking(&chain, Params::new(value)).unwrap();
        let b = run_demo_blocking(&chain, Params::new(value)).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(console.lines().len(), 12);
}

#[tokio::test]
async fn async_run_records_observer_before_service_two() {
    let log = Arc::new(InMemoryEventLog::new());
    let console = Console::capture();
    let chain = build_demo_chain(console.clone(), &ChainConfig { step_timeout_ms: Some(1_000) }, log.clone());

    assert_eq!(run_demo(&chain, Params::new(false)).await.unwrap(), 1);

    let run = log.run_ids()[0];
    let events = log.list(run);
    let observed = events.iter().position(|e| matches!(e.kind, ChainEventKind::ObserverNotified { .. })).unwrap();
    let defaulted = events.iter().position(|e| e.kind == ChainEventKind::DefaultApplied { substituted: true }).unwrap();
    let service_two = events.iter()
                            .position(|e| matches!(&e.kind, ChainEventKind::StepStarted { step_id } if step_id == "service_two"))
                            .unwrap();
    assert!(observed < defaulted && defaulted < service_two);
    assert_eq!(events.last().unwrap().kind, ChainEventKind::ChainCompleted);
}

#[test]
fn print_observer_can_be_combined_with_others() {
    let console = Console::capture();
    let extra = Arc::new(AtomicUsize::new(0));
    let e = extra.clone();
    let chain = ChainBuilder::new().first(ServiceOneStub::new(console.clone()))
                                   .observe(PrintObserver::new(console.clone()))
                                   .observe(move |_: &ServiceOneResult| {
                                       e.fetch_add(1, Ordering::SeqCst);
                                   })
                                   .default_if_empty(ServiceOneResult::Empty)
                                   .then(ServiceTwoStub::new(console.clone()))
                                   .reduce(|r| r.result);
    assert_eq!(chain.block_on(Params::new(true)), Ok(43));
    assert_eq!(extra.load(Ordering::SeqCst), 1);
    assert_eq!(console.lines()[1], "callServicedoOnSuccess: Result1: 42");
}
