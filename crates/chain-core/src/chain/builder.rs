//! Builder por etapas de `CallChain`.
//!
//! El orden de los métodos lo fija el tipo: no existe `then` sin antes
//! declarar un default, así que el step B nunca puede ver un resultado
//! ausente.
//!
//! ```ignore
//! let chain = ChainBuilder::new()
//!     .first(ServiceOneStub)
//!     .observe(|r: &ServiceOneResult| println!("settled: {r}"))
//!     .default_if_empty(ServiceOneResult::Empty)
//!     .then(ServiceTwoStub)
//!     .reduce(|r: ServiceTwoResult| r.result);
//! ```
use std::sync::Arc;
use std::time::Duration;

use super::runner::CallChain;
use crate::event::{EventSink, NoopEventSink};
use crate::step::{OptionalStep, SettlementObserver, Step};

pub(crate) type Observers<T> = Vec<Box<dyn SettlementObserver<T>>>;
pub(crate) type DefaultFactory<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Opciones transversales a todas las etapas.
#[derive(Clone)]
pub(crate) struct ChainOptions {
    pub(crate) sink: Arc<dyn EventSink>,
    pub(crate) step_timeout: Option<Duration>,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self { sink: Arc::new(NoopEventSink),
               step_timeout: None }
    }
}

#[derive(Default)]
pub struct ChainBuilder {
    options: ChainOptions,
}

impl ChainBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.options.sink = sink;
        self
    }

    /// Límite por step. `None` desactiva el timeout.
    pub fn with_step_timeout(mut self, limit: Option<Duration>) -> Self {
        self.options.step_timeout = limit;
        self
    }

    pub fn first<A: OptionalStep>(self, step: A) -> FirstStage<A> {
        FirstStage { options: self.options,
                     first: step,
                     observers: Vec::new() }
    }
}

pub struct FirstStage<A: OptionalStep> {
    options: ChainOptions,
    first: A,
    observers: Observers<A::Output>,
}

impl<A: OptionalStep> FirstStage<A> {
    /// Registra un observer. Se pueden encadenar varios; disparan en orden.
    pub fn observe<O>(mut self, observer: O) -> Self
        where O: SettlementObserver<A::Output> + 'static
    {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn default_if_empty(self, sentinel: A::Output) -> DefaultedStage<A>
        where A::Output: Clone
    {
        self.default_if_empty_with(move || sentinel.clone())
    }

    pub fn default_if_empty_with<F>(self, factory: F) -> DefaultedStage<A>
        where F: Fn() -> A::Output + Send + Sync + 'static
    {
        DefaultedStage { options: self.options,
                         first: self.first,
                         observers: self.observers,
                         default: Box::new(factory) }
    }
}

pub struct DefaultedStage<A: OptionalStep> {
    options: ChainOptions,
    first: A,
    observers: Observers<A::Output>,
    default: DefaultFactory<A::Output>,
}

impl<A: OptionalStep> DefaultedStage<A> {
    pub fn then<B>(self, step: B) -> ThenStage<A, B>
        where B: Step<Input = A::Output>
    {
        ThenStage { options: self.options,
                    first: self.first,
                    observers: self.observers,
                    default: self.default,
                    second: step }
    }
}

pub struct ThenStage<A: OptionalStep, B: Step<Input = A::Output>> {
    options: ChainOptions,
    first: A,
    observers: Observers<A::Output>,
    default: DefaultFactory<A::Output>,
    second: B,
}

impl<A, B> ThenStage<A, B>
    where A: OptionalStep,
          B: Step<Input = A::Output>
{
    /// Reducer terminal: extrae el valor plano del resultado del step B.
    pub fn reduce<F, R>(self, reducer: F) -> CallChain<A, B, F>
        where F: Fn(B::Output) -> R + Send + Sync
    {
        CallChain { options: self.options,
                    first: self.first,
                    observers: self.observers,
                    default: self.default,
                    second: self.second,
                    reducer }
    }
}
