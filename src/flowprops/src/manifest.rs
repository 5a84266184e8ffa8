// flowprops/src/manifest.rs

//! JSON manifest describing the parameter sets to generate.
//!
//! Entries are ordered arrays of `[key, value]` pairs rather than JSON
//! objects, because the generated file content depends on insertion order.

use flowprops_params::{CombinedParams, ParamSet, ParamStyle};
use serde::Deserialize;

/// Top-level manifest: standalone sets plus optional combined sets.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Standalone parameter sets, one output file each
    #[serde(default)]
    pub sets: Vec<SetSpec>,
    /// Combined sets, one output file each
    #[serde(default)]
    pub combined: Vec<CombinedSpec>,
}

/// One named parameter set.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSpec {
    pub name: String,
    pub style: ParamStyle,
    /// Ordered `[key, value]` pairs
    pub entries: Vec<(String, String)>,
}

impl SetSpec {
    /// Build the parameter set this spec describes.
    pub fn to_param_set(&self) -> ParamSet {
        ParamSet::from_entries(
            &self.name,
            self.style,
            self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }
}

/// One combined set: a synthetic key over an ordered list of members.
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedSpec {
    pub key: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    pub members: Vec<SetSpec>,
}

fn default_separator() -> String {
    " ".to_string()
}

impl CombinedSpec {
    /// Build and bind the combined set this spec describes.
    pub fn to_combined_params(&self) -> flowprops_params::BoundCombinedParams {
        let members = self.members.iter().map(SetSpec::to_param_set).collect();
        CombinedParams::new(&self.key, &self.separator).bind(members)
    }
}

impl Manifest {
    /// Parse a manifest from JSON.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
