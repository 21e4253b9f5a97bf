use std::sync::{Arc, Mutex};

/// Destino de la transcripción de la demo: stdout o un buffer capturado.
#[derive(Debug, Clone, Default)]
pub struct Console {
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self { captured: None }
    }

    /// Acumula las líneas en memoria en vez de imprimirlas.
    pub fn capture() -> Self {
        Self { captured: Some(Arc::new(Mutex::new(Vec::new()))) }
    }

    pub fn line(&self, text: impl Into<String>) {
        let text = text.into();
        match &self.captured {
            Some(buf) => buf.lock().unwrap_or_else(|p| p.into_inner()).push(text),
            None => println!("{text}"),
        }
    }

    /// Líneas capturadas hasta ahora (vacío en modo stdout).
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .map(|buf| buf.lock().unwrap_or_else(|p| p.into_inner()).clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_shared_between_clones() {
        let c = Console::capture();
        let c2 = c.clone();
        c.line("uno");
        c2.line("dos");
        assert_eq!(c.lines(), vec!["uno", "dos"]);
    }

    #[test]
    fn stdout_console_has_no_lines() {
        let c = Console::stdout();
        c.line("visible en stdout");
        assert!(c.lines().is_empty());
    }
}
