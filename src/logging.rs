//! Arranque del logging del binario.
//!
//! La librería emite con la fachada `log`; aquí se instala un subscriber de
//! `tracing-subscriber` (su puente `tracing-log` recoge esos registros) que
//! escribe a stderr. Stdout queda libre para la transcripción de la demo.
use tracing_subscriber::EnvFilter;

/// Variable con la directiva de filtro (sintaxis de `RUST_LOG`).
pub const LOG_ENV: &str = "CALLCHAIN_LOG";
pub const DEFAULT_DIRECTIVE: &str = "warn";

pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Instala el subscriber global. Llamadas repetidas no hacen nada.
pub fn init() {
    let _ = tracing_subscriber::fmt().with_env_filter(filter_from_env())
                                     .with_writer(std::io::stderr)
                                     .with_target(false)
                                     .try_init();
}
