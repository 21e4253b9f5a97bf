use async_trait::async_trait;

use crate::errors::ChainError;

/// Step cuya salida puede estar vacía (cardinalidad 0..1).
///
/// `Ok(None)` no es un error: significa que el servicio respondió sin
/// resultado. Los fallos de transporte van por `Err`.
#[async_trait]
pub trait OptionalStep: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + Sync + 'static;

    /// Identificador estable, usado en eventos y errores.
    fn id(&self) -> &'static str;

    async fn call(&self, input: Self::Input) -> Result<Option<Self::Output>, ChainError>;
}

/// Step que siempre produce exactamente un resultado.
#[async_trait]
pub trait Step: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    fn id(&self) -> &'static str;

    async fn call(&self, input: Self::Input) -> Result<Self::Output, ChainError>;
}
