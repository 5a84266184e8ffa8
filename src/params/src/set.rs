// params/src/set.rs

//! Named parameter sets and `.properties` serialization.

use crate::entries::{Entries, Properties};
use crate::error::{ParamsError, Result};
use crate::style::ParamStyle;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A named set of raw key/value parameters with a formatting style.
///
/// Lifecycle: construct from raw entries, call [`ParamSet::accumulate`]
/// exactly once to populate the formatted properties, then optionally
/// serialize with [`ParamSet::write`].
///
/// # Examples
///
/// ```
/// use flowprops_params::{ParamSet, ParamStyle};
///
/// let mut set = ParamSet::new("job_env", ParamStyle::EnvPrefixed);
/// set.insert("HADOOP_NAME", "hadoop");
/// set.accumulate();
/// assert!(set.to_properties_string().starts_with("#job_env.properties\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    /// Set name, used as the file stem and header comment
    name: String,
    /// Formatting rule applied to each raw pair
    style: ParamStyle,
    /// Raw entries in insertion order
    entries: Entries,
    /// Formatted properties, populated by `accumulate`
    properties: Properties,
}

impl ParamSet {
    /// Create a new empty parameter set.
    pub fn new(name: &str, style: ParamStyle) -> Self {
        Self {
            name: name.to_string(),
            style,
            entries: Entries::new(),
            properties: Properties::new(),
        }
    }

    /// Create a parameter set from an ordered sequence of raw pairs.
    pub fn from_entries<K, V, I>(name: &str, style: ParamStyle, entries: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            name: name.to_string(),
            style,
            entries: entries.into_iter().collect(),
            properties: Properties::new(),
        }
    }

    /// Insert a raw entry.
    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Get the set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the formatting style.
    pub fn style(&self) -> ParamStyle {
        self.style
    }

    /// Get the raw entries.
    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    /// Get the accumulated properties. Empty until `accumulate` is called.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Iterate over formatted pairs in reverse insertion order
    /// (last-inserted key first).
    ///
    /// The reverse order is a compatibility contract: downstream file
    /// content depends on it, so it must not be changed to sorted or
    /// forward order.
    pub fn items(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.entries
            .iter_rev()
            .map(|(key, value)| self.style.format_pair(key, value))
    }

    /// Populate the formatted properties from `items()`.
    ///
    /// Intended to be called exactly once per instance; a second call
    /// appends every value again.
    pub fn accumulate(&mut self) {
        let pairs: Vec<_> = self.items().collect();
        for (key, value) in pairs {
            self.properties.append(&key, value);
        }
    }

    /// Render the accumulated properties as file content.
    pub fn to_properties_string(&self) -> String {
        render_properties(&self.name, &self.properties)
    }

    /// Write the accumulated properties to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_properties_string().as_bytes())?;
        Ok(())
    }

    /// Write `{name}.properties` into `dir`.
    ///
    /// The directory must already exist; parent directories are never
    /// created.
    pub fn write(&self, dir: &Path) -> Result<()> {
        write_properties_file(dir, &self.name, &self.to_properties_string())
    }
}

/// Render a header comment plus one `key=values` line per accumulated key.
///
/// Values under a key are joined with a single space; any `=` inside the
/// joined value is escaped as `\=` so downstream properties parsers can
/// tell the delimiter apart from literal content.
pub(crate) fn render_properties(header_stem: &str, properties: &Properties) -> String {
    let mut output = String::new();
    output.push_str(&format!("#{}.properties\n", header_stem));
    for (key, values) in properties.iter() {
        output.push_str(&format!("{}={}\n", key, escape_value(&values.join(" "))));
    }
    output
}

/// Escape `=` inside a value as `\=`. Keys are written verbatim.
fn escape_value(value: &str) -> String {
    value.replace('=', "\\=")
}

/// Create `{stem}.properties` in `dir` and write `content` to it.
pub(crate) fn write_properties_file(dir: &Path, stem: &str, content: &str) -> Result<()> {
    if !dir.is_dir() {
        return Err(ParamsError::MissingDirectory(dir.to_path_buf()));
    }
    let path = dir.join(format!("{}.properties", stem));
    debug!("writing {}", path.display());
    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> ParamSet {
        ParamSet::from_entries(
            "sample_job",
            ParamStyle::Plain,
            [("param_name_1", "value_1"), ("param_name_2", "value_2")],
        )
    }

    #[test]
    fn test_items_reverse_insertion_order() {
        let set = sample_params();
        let items: Vec<_> = set.items().collect();
        let expected = vec![
            ("param_name_2".to_string(), "value_2".to_string()),
            ("param_name_1".to_string(), "value_1".to_string()),
        ];
        assert_eq!(items, expected);
    }

    #[test]
    fn test_accumulate_populates_properties() {
        let mut set = sample_params();
        assert!(set.properties().is_empty());

        set.accumulate();
        assert_eq!(set.properties().get("param_name_1").unwrap()[0], "value_1");
        assert_eq!(set.properties().get("param_name_2").unwrap()[0], "value_2");

        // Accumulation order mirrors items(): last-inserted key first.
        assert_eq!(
            set.properties().keys(),
            &["param_name_2".to_string(), "param_name_1".to_string()]
        );
    }

    #[test]
    fn test_env_items() {
        let set = ParamSet::from_entries(
            "env",
            ParamStyle::EnvPrefixed,
            [("JOB_HADOOP_NAME", "hadoop"), ("JOB_SPARK_MASTER", "yarn")],
        );
        let items: Vec<_> = set.items().collect();
        let expected = vec![
            ("env.JOB_SPARK_MASTER".to_string(), "yarn".to_string()),
            ("env.JOB_HADOOP_NAME".to_string(), "hadoop".to_string()),
        ];
        assert_eq!(items, expected);
    }

    #[test]
    fn test_executor_flag_items() {
        let set = ParamSet::from_entries(
            "executor",
            ParamStyle::ExecutorFlag,
            [("JOB_HADOOP_NAME", "hadoop"), ("JOB_SPARK_MASTER", "yarn")],
        );
        let items: Vec<_> = set.items().collect();
        let expected = vec![
            (
                "JOB_SPARK_MASTER".to_string(),
                "--conf spark.executorEnv.JOB_SPARK_MASTER=yarn".to_string(),
            ),
            (
                "JOB_HADOOP_NAME".to_string(),
                "--conf spark.executorEnv.JOB_HADOOP_NAME=hadoop".to_string(),
            ),
        ];
        assert_eq!(items, expected);
    }

    #[test]
    fn test_driver_flag_items() {
        let set = ParamSet::from_entries(
            "driver",
            ParamStyle::DriverFlag,
            [("JOB_HADOOP_NAME", "hadoop"), ("JOB_SPARK_MASTER", "yarn")],
        );
        let items: Vec<_> = set.items().collect();
        let expected = vec![
            (
                "JOB_SPARK_MASTER".to_string(),
                "--conf spark.yarn.appMasterEnv.JOB_SPARK_MASTER=yarn".to_string(),
            ),
            (
                "JOB_HADOOP_NAME".to_string(),
                "--conf spark.yarn.appMasterEnv.JOB_HADOOP_NAME=hadoop".to_string(),
            ),
        ];
        assert_eq!(items, expected);
    }

    #[test]
    fn test_config_flag_items() {
        let set = ParamSet::from_entries(
            "config",
            ParamStyle::ConfigFlag,
            [("JOB_HADOOP_NAME", "hadoop"), ("JOB_SPARK_MASTER", "yarn")],
        );
        let items: Vec<_> = set.items().collect();
        let expected = vec![
            (
                "JOB_SPARK_MASTER".to_string(),
                "--conf JOB_SPARK_MASTER=yarn".to_string(),
            ),
            (
                "JOB_HADOOP_NAME".to_string(),
                "--conf JOB_HADOOP_NAME=hadoop".to_string(),
            ),
        ];
        assert_eq!(items, expected);
    }

    #[test]
    fn test_to_properties_string_exact() {
        let mut set = sample_params();
        set.accumulate();
        assert_eq!(
            set.to_properties_string(),
            "#sample_job.properties\nparam_name_2=value_2\nparam_name_1=value_1\n"
        );
    }

    #[test]
    fn test_equals_escaped_in_values() {
        let mut set = ParamSet::new("conf", ParamStyle::ConfigFlag);
        set.insert("spark.master", "yarn");
        set.accumulate();
        assert_eq!(
            set.to_properties_string(),
            "#conf.properties\nspark.master=--conf spark.master\\=yarn\n"
        );
    }

    #[test]
    fn test_write_to_buffer() {
        let mut set = ParamSet::new("p", ParamStyle::Plain);
        set.insert("k", "v");
        set.accumulate();

        let mut buffer = Vec::new();
        set.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "#p.properties\nk=v\n");
    }
}
