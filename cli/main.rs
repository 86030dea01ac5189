use cqsh::Launcher;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CQSH_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    let err = Launcher::new().launch(std::env::args_os());
    match err.source() {
        Some(cause) => tracing::error!("{} - {}", err, cause),
        None => tracing::error!("{}", err),
    }

    std::process::exit(err.exit_code());
}
