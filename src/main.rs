use lending_catalog::{adapters::SystemClock, application::catalog::Catalog, console::Session};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing (stderr, so it does not interleave with the console)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lending_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut catalog = Catalog::new(Arc::new(SystemClock::new()));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&mut catalog, stdin.lock(), stdout.lock());

    tracing::info!("console session started");

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("console I/O error: {}", err);
            eprintln!("console I/O error: {}", err);
            ExitCode::FAILURE
        }
    }
}
