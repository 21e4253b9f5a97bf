use std::sync::Arc;

use callchain_sandbox::config::CONFIG;
use callchain_sandbox::services::Console;
use callchain_sandbox::{build_demo_chain, run_demo_blocking, Params};
use chain_core::NoopEventSink;
use log::debug;

fn main() {
    // Cargar variables de entorno desde .env si existe
    let _ = dotenvy::dotenv();
    callchain_sandbox::logging::init();

    let config = &*CONFIG;
    debug!("config: {}", serde_json::to_string(config).unwrap_or_default());

    let console = Console::stdout();
    let chain = build_demo_chain(console.clone(), &config.chain, Arc::new(NoopEventSink));

    // Bloqueo sólo aquí, en el borde del programa.
    match run_demo_blocking(&chain, Params::new(config.demo.param_value)) {
        Ok(result) => console.line(result.to_string()),
        Err(e) => eprintln!("call chain failed: {e}"),
    }
}
