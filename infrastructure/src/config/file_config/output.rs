//! `[output]` section: result format, colors and the batch progress bar

use autoreply_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; `-o` on the command line wins
    pub format: Option<OutputFormat>,
    pub color: bool,
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}

impl FileOutputConfig {
    /// Command-line choice, then this section, then text
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    /// Colors stay off when `NO_COLOR` is set to anything non-empty
    pub fn use_color(&self) -> bool {
        self.color && !std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }
}
