//! Restamp - Recursive Timestamp Rewriter
//!
//! Sets every entry under a directory to one resolved timestamp so that
//! repeated builds see identical modification times (stable build cache
//! keys). The timestamp comes from explicit input, a store file written
//! by a previous run, or the wall clock, in that priority order.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod timestamp;
pub mod touch;

pub use config::RunConfig;
pub use error::{RestampError, RestampResult};
pub use touch::TouchResult;

use cache::{CacheNotifier, IncludeFileNotifier, NoopNotifier};
use tracing::info;

/// Run one full resolve-and-touch pass over `config.root`
pub fn run(config: &RunConfig) -> RestampResult<TouchResult> {
    config.validate()?;
    config.log();

    let notifier: Box<dyn CacheNotifier> = match &config.cache_include_file {
        Some(path) => Box::new(IncludeFileNotifier::new(path.clone())),
        None => Box::new(NoopNotifier),
    };

    let resolution = timestamp::resolve(
        config.touch_time.as_deref(),
        config.store_file.as_deref(),
        notifier.as_ref(),
    )?;
    info!(
        "Using timestamp {} ({})",
        timestamp::to_rfc3339(&resolution.timestamp),
        resolution.provenance
    );

    let result = touch::touch_tree(&config.root, &resolution.timestamp)?;
    info!(
        "{} entries touched in {:.2?}",
        result.touched, result.elapsed
    );

    Ok(result)
}
