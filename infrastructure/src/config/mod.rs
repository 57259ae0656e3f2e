//! Configuration file loading for review-autoreply
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AUTOREPLY_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./autoreply.toml` or `./.autoreply.toml`
//! 4. Global: `$XDG_CONFIG_HOME/review-autoreply/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileActivityLogConfig, FileBatchConfig, FileBusinessConfig, FileConfig, FileGenerationConfig,
    FileInsightsConfig, FileOutputConfig, FileProviderConfig, FileRateLimitConfig,
};
pub use loader::{ConfigError, ConfigLoader};
