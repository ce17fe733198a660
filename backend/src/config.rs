//! Process configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the binary
//! through `dotenvy`), with CLI flags taking precedence.
//!
//! | Variable                 | Default              |
//! |--------------------------|----------------------|
//! | `PORT`                   | `8050`               |
//! | `HOST`                   | `0.0.0.0`            |
//! | `MEDLIST_DATA`           | `med_list_clean.csv` |
//! | `MEDLIST_HIDDEN_COLUMNS` | `6`                  |
//! | `MEDLIST_TOOLTIP_FORMAT` | `plain`              |
//! | `MEDLIST_MARKERS`        | `color`              |
//! | `MEDLIST_DISPLAY_NAME`   | `plain`              |
//! | `MEDLIST_STATIC_DIR`     | `frontend/dist`      |

use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};
use crate::models::Dataset;
use crate::table::{
    ColumnPartition, DashboardOptions, DisplayName, MarkerKind, TooltipFormat, DEFAULT_HIDDEN_TAIL,
};

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATA_FILE: &str = "med_list_clean.csv";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Which columns go to the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub enum HiddenColumns {
    /// The last `n` columns of the file.
    Last(usize),
    /// These names, in this order.
    Named(Vec<String>),
}

impl HiddenColumns {
    fn parse(raw: &str) -> Self {
        match raw.trim().parse::<usize>() {
            Ok(n) => HiddenColumns::Last(n),
            Err(_) => HiddenColumns::Named(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    pub fn partition(&self, headers: &[String]) -> ColumnPartition {
        match self {
            HiddenColumns::Last(n) => ColumnPartition::split_last(headers, *n),
            HiddenColumns::Named(names) => ColumnPartition::from_hidden(headers, names.clone()),
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub hidden: HiddenColumns,
    pub tooltip_format: TooltipFormat,
    pub markers: MarkerKind,
    pub display_name: DisplayName,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            hidden: HiddenColumns::Last(DEFAULT_HIDDEN_TAIL),
            tooltip_format: TooltipFormat::Plain,
            markers: MarkerKind::Color,
            display_name: DisplayName::Plain,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(path) = lookup("MEDLIST_DATA") {
            config.data_file = PathBuf::from(path);
        }
        if let Some(hidden) = lookup("MEDLIST_HIDDEN_COLUMNS") {
            config.hidden = HiddenColumns::parse(&hidden);
        }
        if let Some(format) = lookup("MEDLIST_TOOLTIP_FORMAT") {
            config.tooltip_format = format.parse().map_err(|value| ConfigError::InvalidValue {
                name: "MEDLIST_TOOLTIP_FORMAT".into(),
                value,
            })?;
        }
        if let Some(markers) = lookup("MEDLIST_MARKERS") {
            config.markers = markers.parse().map_err(|value| ConfigError::InvalidValue {
                name: "MEDLIST_MARKERS".into(),
                value,
            })?;
        }
        if let Some(mode) = lookup("MEDLIST_DISPLAY_NAME") {
            config.display_name = parse_display_name(&mode)?;
        }
        if let Some(dir) = lookup("MEDLIST_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Presentation settings for a loaded dataset.
    pub fn dashboard_options(&self, dataset: &Dataset) -> DashboardOptions {
        DashboardOptions {
            partition: self.hidden.partition(dataset.headers()),
            tooltip_format: self.tooltip_format,
            display_name: self.display_name,
            ..DashboardOptions::for_dataset(dataset)
        }
    }
}

fn parse_display_name(raw: &str) -> ConfigResult<DisplayName> {
    match raw.trim().to_lowercase().as_str() {
        "plain" => Ok(DisplayName::Plain),
        "icon" => Ok(DisplayName::WithIcon),
        "generic" => Ok(DisplayName::WithGeneric),
        other => Err(ConfigError::InvalidValue {
            name: "MEDLIST_DISPLAY_NAME".into(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ConfigResult<AppConfig> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.port, 8050);
        assert_eq!(cfg.bind_address(), "0.0.0.0:8050");
        assert_eq!(cfg.hidden, HiddenColumns::Last(6));
        assert_eq!(cfg.data_file, PathBuf::from("med_list_clean.csv"));
    }

    #[test]
    fn test_port_from_env() {
        let cfg = config(&[("PORT", "9000"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(cfg.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(config(&[("PORT", "http")]), Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn test_hidden_columns_by_name() {
        let cfg = config(&[("MEDLIST_HIDDEN_COLUMNS", "Mechanism of Action, Common Side Effects")]).unwrap();
        assert_eq!(
            cfg.hidden,
            HiddenColumns::Named(vec!["Mechanism of Action".into(), "Common Side Effects".into()])
        );
    }

    #[test]
    fn test_enum_values() {
        let cfg = config(&[
            ("MEDLIST_TOOLTIP_FORMAT", "markdown"),
            ("MEDLIST_MARKERS", "icon"),
            ("MEDLIST_DISPLAY_NAME", "icon"),
        ])
        .unwrap();
        assert_eq!(cfg.tooltip_format, TooltipFormat::Markdown);
        assert_eq!(cfg.markers, MarkerKind::Icon);
        assert_eq!(cfg.display_name, DisplayName::WithIcon);

        assert!(config(&[("MEDLIST_MARKERS", "stripes")]).is_err());
    }

    #[test]
    fn test_dashboard_options_partition() {
        let ds = Dataset::new(vec!["a".into(), "b".into(), "c".into()], vec![]);
        let cfg = config(&[("MEDLIST_HIDDEN_COLUMNS", "1")]).unwrap();
        let opts = cfg.dashboard_options(&ds);
        assert_eq!(opts.partition.visible, ["a", "b"]);
        assert_eq!(opts.partition.hidden, ["c"]);
    }
}
