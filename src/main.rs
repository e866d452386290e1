use std::process::exit;

use tracing_subscriber::EnvFilter;

use contactctl::prelude::run_app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run_app() {
        eprintln!("{err}");
        exit(1);
    }
}
