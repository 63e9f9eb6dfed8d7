use meal::{demo, MealError};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MealError> {
    // Diagnostics go to stderr; stdout carries the summary only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    demo::serve(&mut stdout)?;
    Ok(())
}
