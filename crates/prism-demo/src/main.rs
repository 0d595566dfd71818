mod app;
mod config;
mod fonts;
mod scene;

use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::Runtime;

use crate::app::DemoApp;
use crate::config::DemoConfig;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("prism-demo exited with error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = DemoConfig::default();
    let runtime = config.runtime();
    let gpu = config.gpu();

    Runtime::run(runtime, gpu, DemoApp::new(config))
}
