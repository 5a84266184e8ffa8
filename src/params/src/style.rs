// params/src/style.rs

//! Per-consumer formatting rules for parameter pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Formatting rule applied to each raw key/value pair of a parameter set.
///
/// Each target consumer of the generated properties files expects its own
/// shape: plain job parameters pass through untouched, environment variables
/// gain an `env.` key prefix, and the Spark submission dialects fold the
/// pair into a `--conf` flag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStyle {
    /// Pass key and value through unchanged
    Plain,
    /// Prefix the key with `env.`, leave the value unchanged
    EnvPrefixed,
    /// Fold into `--conf spark.executorEnv.{key}={value}`
    ExecutorFlag,
    /// Fold into `--conf spark.yarn.appMasterEnv.{key}={value}`
    DriverFlag,
    /// Fold into `--conf {key}={value}`
    ConfigFlag,
}

impl ParamStyle {
    /// Apply this style's transform to one raw pair.
    pub fn format_pair(&self, key: &str, value: &str) -> (String, String) {
        match self {
            ParamStyle::Plain => (key.to_string(), value.to_string()),
            ParamStyle::EnvPrefixed => (format!("env.{}", key), value.to_string()),
            ParamStyle::ExecutorFlag => (
                key.to_string(),
                format!("--conf spark.executorEnv.{}={}", key, value),
            ),
            ParamStyle::DriverFlag => (
                key.to_string(),
                format!("--conf spark.yarn.appMasterEnv.{}={}", key, value),
            ),
            ParamStyle::ConfigFlag => (key.to_string(), format!("--conf {}={}", key, value)),
        }
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamStyle::Plain => "plain",
            ParamStyle::EnvPrefixed => "env_prefixed",
            ParamStyle::ExecutorFlag => "executor_flag",
            ParamStyle::DriverFlag => "driver_flag",
            ParamStyle::ConfigFlag => "config_flag",
        };
        write!(f, "{}", name)
    }
}
