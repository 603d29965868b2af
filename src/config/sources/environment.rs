//! Environment variable source: TREEHASH__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `TREEHASH__HASHING__MAX_OPEN_FILES=8` sets `hashing.max_open_files`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TREEHASH")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
