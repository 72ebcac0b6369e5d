pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod printer;
pub mod traversal;

pub use config::*;
pub use error::*;
pub use grid::Grid;
pub use pipeline::{run, run_reference, verify_equivalence, Equivalence, RunSummary};
pub use traversal::{fill, values, Traversal};

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
/// Stdout carries only grid output. Safe to call more than once.
pub fn init_tracing(service: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(service, "tracing initialized");
    }
}
