// params/src/combined.rs

//! Combination of several parameter sets under one synthetic key.

use crate::entries::Properties;
use crate::error::Result;
use crate::set::{render_properties, write_properties_file, ParamSet};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Builder for a combined parameter set.
///
/// A combined set concatenates the output of several member sets into a
/// single property stored under one synthetic key. Binding the members is an
/// explicit step: only the [`BoundCombinedParams`] returned by
/// [`CombinedParams::bind`] exposes `accumulate` and `write`, so a combined
/// set can never be used before its members are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedParams {
    /// Synthetic key the joined output is stored under
    key: String,
    /// Separator placed between the per-member strings
    separator: String,
}

impl CombinedParams {
    /// Create a new combined-set builder.
    pub fn new(key: &str, separator: &str) -> Self {
        Self {
            key: key.to_string(),
            separator: separator.to_string(),
        }
    }

    /// Bind an ordered sequence of member sets, taking ownership of them.
    pub fn bind(self, members: Vec<ParamSet>) -> BoundCombinedParams {
        BoundCombinedParams {
            key: self.key,
            separator: self.separator,
            members,
            properties: Properties::new(),
        }
    }
}

/// A combined parameter set with its members bound.
///
/// # Examples
///
/// ```
/// use flowprops_params::{CombinedParams, ParamSet, ParamStyle};
///
/// let mut driver = ParamSet::new("driver", ParamStyle::DriverFlag);
/// driver.insert("SPARK_MASTER", "yarn");
///
/// let mut combined = CombinedParams::new("custom.env", " ").bind(vec![driver]);
/// combined.accumulate();
/// assert_eq!(combined.file_stem(), "driver");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundCombinedParams {
    key: String,
    separator: String,
    /// Member sets in bound order
    members: Vec<ParamSet>,
    /// Single accumulated property under the synthetic key
    properties: Properties,
}

impl BoundCombinedParams {
    /// Get the synthetic key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the bound member sets.
    pub fn members(&self) -> &[ParamSet] {
        &self.members
    }

    /// Get the accumulated properties. Empty until `accumulate` is called.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// File stem used by [`BoundCombinedParams::write`]: the member names
    /// joined by `_`, in bound order. The synthetic key plays no part in
    /// the file name.
    pub fn file_stem(&self) -> String {
        self.members
            .iter()
            .map(|member| member.name())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Accumulate each member, then store one joined string under the
    /// synthetic key.
    ///
    /// Each member's own accumulated values are joined with a single space;
    /// the resulting per-member strings are joined with the separator.
    /// Intended to be called exactly once, like [`ParamSet::accumulate`].
    pub fn accumulate(&mut self) {
        let mut member_strings = Vec::with_capacity(self.members.len());
        for member in &mut self.members {
            member.accumulate();
            let values: Vec<&str> = member
                .properties()
                .iter()
                .flat_map(|(_, values)| values.iter().map(|v| v.as_str()))
                .collect();
            member_strings.push(values.join(" "));
        }
        self.properties
            .append(&self.key, member_strings.join(&self.separator));
    }

    /// Render the accumulated output as file content.
    ///
    /// The header is the literal `#params.properties` rather than the file
    /// stem; this mirrors the historical output format byte for byte.
    pub fn to_properties_string(&self) -> String {
        render_properties("params", &self.properties)
    }

    /// Write the accumulated output to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.to_properties_string().as_bytes())?;
        Ok(())
    }

    /// Write `{file_stem}.properties` into `dir`.
    pub fn write(&self, dir: &Path) -> Result<()> {
        write_properties_file(dir, &self.file_stem(), &self.to_properties_string())
    }
}
