//! Configuración central de la aplicación.
//! Carga variables de entorno (.env ya leído por `main`) y expone una
//! estructura inmutable (`CONFIG`). Nada aquí es obligatorio: sin variables
//! la demo corre la invocación fija `Params(false)` sin timeout.
use log::warn;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::env;
use std::time::Duration;

use crate::errors::CoreError;

pub const PARAM_VALUE_ENV: &str = "CALLCHAIN_PARAM_VALUE";
pub const STEP_TIMEOUT_ENV: &str = "CALLCHAIN_STEP_TIMEOUT_MS";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub demo: DemoConfig,
    pub chain: ChainConfig,
}

/// Parámetros de la invocación de demo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoConfig {
    /// Valor de `Params.value` para la única invocación del binario.
    pub param_value: bool,
}

/// Opciones del runner de la cadena.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainConfig {
    /// Timeout por step en milisegundos. `None` = sin límite.
    pub step_timeout_ms: Option<u64>,
}

impl ChainConfig {
    pub fn step_timeout(&self) -> Option<Duration> {
        self.step_timeout_ms.map(Duration::from_millis)
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let param_value = match lookup(PARAM_VALUE_ENV) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| CoreError::Config(format!("{PARAM_VALUE_ENV}={raw} no es booleano")))?,
            None => false,
        };
        let step_timeout_ms = match lookup(STEP_TIMEOUT_ENV) {
            Some(raw) => {
                let ms = raw.trim()
                            .parse::<u64>()
                            .map_err(|e| CoreError::Config(format!("{STEP_TIMEOUT_ENV}={raw}: {e}")))?;
                Some(ms)
            }
            None => None,
        };
        Ok(AppConfig { demo: DemoConfig { param_value },
                       chain: ChainConfig { step_timeout_ms } })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
/// Si el entorno trae valores inválidos se usan los defaults.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
                             warn!("{e}; usando configuración por defecto");
                             AppConfig::default()
                         })
});
