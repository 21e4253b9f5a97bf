/// Sustituye un resultado ausente por el centinela dado.
///
/// Es la pieza que evita el corto circuito: la continuación del step B exige
/// exactamente un valor, así que `None` nunca debe llegar hasta ella.
pub fn default_if_empty<T>(outcome: Option<T>, sentinel: T) -> T {
    outcome.unwrap_or(sentinel)
}

/// Variante perezosa usada por el runner; informa si hubo sustitución.
pub(crate) fn substitute<T>(outcome: Option<T>, sentinel: impl FnOnce() -> T) -> (T, bool) {
    match outcome {
        Some(v) => (v, false),
        None => (sentinel(), true),
    }
}
