//! Binary entry point that wires the in-memory stores to the text menu
//! shell. Bootstrapping is deliberately thin: set up logging to stderr so
//! the menu on stdout stays clean, construct the shell over empty stores,
//! and run the loop until the user exits.

use anyhow::Result;
use library_lending_manager::Shell;
use tracing_subscriber::EnvFilter;

/// Returning a `Result` bubbles fatal I/O problems (for example stdin
/// closing mid-session) up to the terminal instead of crashing silently.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Shell::new().run()
}
