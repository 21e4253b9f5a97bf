//! Servicios simulados de la demo.
//!
//! Simulan llamadas reales del tipo:
//!
//! ```text
//! POST /service1 (Params) -> 200 Result1 | 412 (vacío) | error
//! POST /service2 (Result1) -> 200 Result2 | error
//! ```
//!
//! Aquí no hay transporte: cada stub imprime su input en la `Console` y
//! devuelve un valor fijo. Un cliente real implementaría los mismos traits
//! (`OptionalStep` / `Step`) mapeando sus fallos a `ChainError`.

mod console;
mod observer;
mod service_one;
mod service_two;

pub use console::Console;
pub use observer::PrintObserver;
pub use service_one::ServiceOneStub;
pub use service_two::ServiceTwoStub;
