use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

const DEFAULT_CONFIG_PATH: &str = "./env/config.json";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default)]
    pub slack_user_id: String,
    #[serde(default)]
    pub group_approvers: String,
    /// Optional timeout for the webhook POST, in seconds. Absent means the
    /// request may block until the OS gives up on the connection.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from an explicit path, or the fixed relative
    /// default the CI hook ships with.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self, Error> {
        let path = path_override.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let contents = fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let cfg: Config =
            serde_json::from_str(&contents).map_err(|source| Error::ConfigParse { path, source })?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_config_success() {
        let file = write_config(
            r#"{"webhook_url": "https://hook", "slack_user_id": "U1", "group_approvers": "G1"}"#,
        );

        let cfg = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.webhook_url, "https://hook");
        assert_eq!(cfg.slack_user_id, "U1");
        assert_eq!(cfg.group_approvers, "G1");
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = Config::load(Some(PathBuf::from("/nonexistent/config.json")));
        assert_matches!(result, Err(Error::ConfigRead { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let file = write_config("{not json");
        let result = Config::load(Some(file.path().to_path_buf()));
        assert_matches!(result, Err(Error::ConfigParse { .. }));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let file = write_config(r#"{"webhook_url": "https://hook"}"#);
        let cfg = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.slack_user_id, "");
        assert_eq!(cfg.group_approvers, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let file = write_config(
            r##"{"webhook_url": "https://hook", "channel": "#prs", "timeout_secs": 10}"##,
        );
        let cfg = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.webhook_url, "https://hook");
        assert_eq!(cfg.timeout_secs, Some(10));
    }
}
