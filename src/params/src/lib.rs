// params/src/lib.rs

//! Generation of `.properties` job-configuration files from structured
//! key/value parameter sets.
//!
//! This library provides:
//! - Named parameter sets with per-consumer formatting styles (plain
//!   parameters, `env.`-prefixed environment variables, and the Spark
//!   executor/driver/config `--conf` flag dialects)
//! - Deterministic accumulation and escaped `.properties` serialization
//! - Combination of several sets under one synthetic key
//!
//! ```no_run
//! use flowprops_params::{ParamSet, ParamStyle};
//!
//! fn main() -> flowprops_params::Result<()> {
//!     let mut env = ParamSet::new("job_env", ParamStyle::EnvPrefixed);
//!     env.insert("HADOOP_NAME", "hadoop");
//!     env.insert("SPARK_MASTER", "yarn");
//!     env.accumulate();
//!     env.write(std::path::Path::new("conf"))?;
//!     Ok(())
//! }
//! ```

pub mod combined;
pub mod entries;
pub mod error;
pub mod set;
pub mod style;

pub use combined::{BoundCombinedParams, CombinedParams};
pub use entries::{Entries, Properties};
pub use error::{ParamsError, Result};
pub use set::ParamSet;
pub use style::ParamStyle;
