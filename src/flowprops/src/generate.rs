// flowprops/src/generate.rs

use crate::manifest::Manifest;
use anyhow::Context;
use log::info;
use std::path::Path;

/// Generate `.properties` files from a manifest into an existing directory.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> anyhow::Result<()> {
    if !output_dir.is_dir() {
        anyhow::bail!(
            "Output directory {} does not exist. Create it first; it is never created implicitly.",
            output_dir.display()
        );
    }

    let content = fs_err::read_to_string(manifest_path).context(format!(
        "Failed to read manifest: {}",
        manifest_path.display()
    ))?;
    let manifest = Manifest::from_json(&content).context(format!(
        "Failed to parse manifest: {}",
        manifest_path.display()
    ))?;

    for spec in &manifest.sets {
        let mut set = spec.to_param_set();
        set.accumulate();
        set.write(output_dir)?;
        info!("wrote {}.properties ({} style)", set.name(), set.style());
    }

    for spec in &manifest.combined {
        let mut combined = spec.to_combined_params();
        combined.accumulate();
        combined.write(output_dir)?;
        info!("wrote {}.properties (combined)", combined.file_stem());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "sets": [
            {"name": "job_env", "style": "env_prefixed",
             "entries": [["HADOOP_NAME", "hadoop"], ["SPARK_MASTER", "yarn"]]}
        ],
        "combined": [
            {"key": "custom.env", "separator": " ",
             "members": [
                 {"name": "driver", "style": "driver_flag",
                  "entries": [["SPARK_MASTER", "yarn"]]}
             ]}
        ]
    }"#;

    #[test]
    fn test_generate_from_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("manifest.json");
        fs_err::write(&manifest_path, MANIFEST).unwrap();

        let output_dir = dir.path().join("out");
        fs_err::create_dir(&output_dir).unwrap();

        generate(&manifest_path, &output_dir).unwrap();

        let env = fs_err::read_to_string(output_dir.join("job_env.properties")).unwrap();
        assert_eq!(
            env,
            "#job_env.properties\nenv.SPARK_MASTER=yarn\nenv.HADOOP_NAME=hadoop\n"
        );

        let combined = fs_err::read_to_string(output_dir.join("driver.properties")).unwrap();
        assert_eq!(
            combined,
            "#params.properties\ncustom.env=--conf spark.yarn.appMasterEnv.SPARK_MASTER\\=yarn\n"
        );
    }

    #[test]
    fn test_generate_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("manifest.json");
        fs_err::write(&manifest_path, MANIFEST).unwrap();

        let missing = dir.path().join("no_such_dir");
        let err = generate(&manifest_path, &missing).unwrap_err();
        assert!(err.to_string().contains("no_such_dir"));
    }

    #[test]
    fn test_generate_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let result = generate(&dir.path().join("absent.json"), dir.path());
        assert!(result.is_err());
    }
}
