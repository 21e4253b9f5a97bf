//! Tipos de la demo: parámetros del servicio 1 y resultados de ambos servicios.
//!
//! Los `Display` reproducen la transcripción que imprime el binario.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Si es `true` el servicio 1 responde con un resultado; si no, vacío.
    pub value: bool,
}

impl Params {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params: {}", self.value)
    }
}

/// Resultado del servicio 1 una vez que dejó de ser opcional.
///
/// "Ausente" sólo existe como `Option::None` antes de la sustitución. Los
/// tres estados de aquí son distintos entre sí: un valor real, un payload
/// explícitamente nulo, y el centinela `Empty` que pone la sustitución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceOneResult {
    Value(i32),
    Null,
    Empty,
}

impl ServiceOneResult {
    pub fn value(&self) -> Option<i32> {
        match self {
            ServiceOneResult::Value(v) => Some(*v),
            ServiceOneResult::Null | ServiceOneResult::Empty => None,
        }
    }
}

impl fmt::Display for ServiceOneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceOneResult::Value(v) => write!(f, "Result1: {v}"),
            ServiceOneResult::Null => write!(f, "Result1: null"),
            ServiceOneResult::Empty => write!(f, "EmptyResult1"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTwoResult {
    pub result: i32,
}

impl ServiceTwoResult {
    pub fn new(result: i32) -> Self {
        Self { result }
    }
}

impl fmt::Display for ServiceTwoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result2: {}", self.result)
    }
}
