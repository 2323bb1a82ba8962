use crate::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty JSON pipeline trace.
    pub json_out: Option<PathBuf>,
    /// Directory receiving one PNG per cropped day column.
    pub crops_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: DetectorParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_default_params() {
        let cfg = parse_config(r#"{ "input": "photo.jpg" }"#).expect("parse");
        assert_eq!(cfg.input_path, PathBuf::from("photo.jpg"));
        assert!(cfg.output.json_out.is_none());
        assert!(cfg.output.crops_dir.is_none());
        assert_eq!(cfg.params, DetectorParams::default());
    }

    #[test]
    fn shipped_demo_config_parses() {
        let cfg = parse_config(include_str!("../../config/column_demo.json")).expect("parse");
        assert_eq!(cfg.params.time_column.max_percent, 13);
        assert_eq!(
            cfg.output.crops_dir.as_deref(),
            Some(Path::new("out/columns"))
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(parse_config(r#"{ "output": {} }"#).is_err());
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/column_demo.json")).unwrap_err();
        assert!(err.contains("/nonexistent/column_demo.json"), "{err}");
    }
}
