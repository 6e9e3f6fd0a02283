use crate::error::{FunnelError, FvResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub source: SourceOptions,
    #[command(flatten)]
    pub display: DisplayOptions,
}

/// How the counter CSV is parsed.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceOptions {
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    // Headers and values are trimmed unless this is set
    #[arg(long, default_value_t = false)]
    pub no_trim: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            no_trim: false,
        }
    }
}

impl SourceOptions {
    pub fn delimiter_byte(&self) -> FvResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(FunnelError::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )))
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Decimal places shown for conversion percentages
    #[arg(long, default_value_t = 1)]
    pub precision: usize,

    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: 1,
            no_color: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FvResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FunnelError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the arguments the user actually typed, so file values
    /// survive clap's defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(source.delimiter);
        update_if_present!(source.no_trim);

        update_if_present!(display.precision);
        update_if_present!(display.no_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_delimiter_accepted() {
        let opts = SourceOptions {
            delimiter: '\t',
            ..Default::default()
        };
        assert_eq!(opts.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let opts = SourceOptions {
            delimiter: '、',
            ..Default::default()
        };
        assert!(matches!(
            opts.delimiter_byte(),
            Err(FunnelError::Config(_))
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"display": {"precision": 2}}"#).unwrap();
        assert_eq!(cfg.display.precision, 2);
        assert!(!cfg.display.no_color);
        assert_eq!(cfg.source, SourceOptions::default());
    }
}
