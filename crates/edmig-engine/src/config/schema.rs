use crate::resolution::renderer::DEFAULT_SEPARATOR_WIDTH;
use edmig_common::formatter::DumpFormat;
use edmig_common::naming::NamingStrategyKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdmigConfig {
    #[serde(default)]
    pub naming_strategy: NamingStrategyKind,
    #[serde(default)]
    pub dump_format: DumpFormat,
    /// Never prompt, even when a terminal is attached.
    #[serde(default)]
    pub no_interaction: bool,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

impl Default for EdmigConfig {
    fn default() -> Self {
        Self {
            naming_strategy: NamingStrategyKind::default(),
            dump_format: DumpFormat::default(),
            no_interaction: false,
            separator_width: default_separator_width(),
        }
    }
}

impl EdmigConfig {
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(strategy) = overrides.naming_strategy {
            self.naming_strategy = strategy;
        }
        if let Some(format) = overrides.dump_format {
            self.dump_format = format;
        }
        // a flag can only turn prompting off
        self.no_interaction |= overrides.no_interaction;
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub naming_strategy: Option<NamingStrategyKind>,
    pub dump_format: Option<DumpFormat>,
    pub no_interaction: bool,
}

fn default_separator_width() -> usize {
    DEFAULT_SEPARATOR_WIDTH
}
