//! Task file loading

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::{resolve_encoding, to_list};

pub const DEFAULT_STORE: &str = "properties.json";
pub const ENV_PREFIX: &str = "PROPERTIES_READER_";

const CANDIDATES: [&str; 4] = [
    "properties-reader.toml",
    ".properties-reader.toml",
    "properties-reader.yml",
    "properties-reader.yaml",
];

/// Settings and target definitions from a task file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// JSON file receiving the parsed targets.
    pub store: PathBuf,
    /// Encoding label for reading properties files; auto-detected when unset.
    pub encoding: Option<String>,
    /// Keep a leading byte-order mark in the decoded text.
    pub preserve_bom: bool,
    /// Target name to a file, a list of files, or `false`/`null` for none.
    pub targets: BTreeMap<String, serde_json::Value>,
    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from(DEFAULT_STORE),
            encoding: None,
            preserve_bom: false,
            targets: BTreeMap::new(),
            base_dir: PathBuf::new(),
        }
    }
}

impl TaskConfig {
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Files of `target` in declaration order, resolved against the task file's
    /// directory. `None` when the target is not defined.
    pub fn target_files(&self, target: &str) -> Option<Vec<PathBuf>> {
        let value = self.targets.get(target)?;
        let files = to_list(value.clone())
            .into_iter()
            .map(|entry| match entry {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .map(|name| self.base_dir.join(name))
            .collect();
        Some(files)
    }

    pub fn store_path(&self) -> PathBuf {
        self.base_dir.join(&self.store)
    }

    /// Resolve the configured encoding label, if any.
    pub fn resolved_encoding(&self) -> Result<Option<&'static Encoding>> {
        match self.encoding.as_deref() {
            None => Ok(None),
            Some(label) => resolve_encoding(label)
                .map(Some)
                .ok_or_else(|| anyhow::anyhow!("Unknown encoding '{}'", label)),
        }
    }
}

/// Load the task file at `config_path`, or discover one in `cwd`.
///
/// Values are layered as defaults < file < `PROPERTIES_READER_*` environment.
pub fn load_task_config(cwd: &Path, config_path: Option<&Path>) -> Result<TaskConfig> {
    let config_file = match config_path {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                anyhow::bail!("Task file not found: {}", path.display());
            }
            path
        }
        None => discover_config(cwd).ok_or_else(|| {
            anyhow::anyhow!(
                "No task file found in {} (looked for {})",
                cwd.display(),
                CANDIDATES.join(", ")
            )
        })?,
    };

    let config_file = config_file
        .canonicalize()
        .with_context(|| format!("Failed resolving task file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = Figment::from(Serialized::defaults(TaskConfig::default()));
    let figment = match ext.as_str() {
        "toml" => figment.merge(Toml::file(&config_file)),
        "yaml" | "yml" => figment.merge(Yaml::file(&config_file)),
        other => anyhow::bail!(
            "Unsupported task file extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };
    let figment =
        figment.merge(Env::prefixed(ENV_PREFIX).only(&["store", "encoding", "preserve_bom"]));

    let mut config: TaskConfig = figment
        .extract()
        .with_context(|| format!("Invalid task file: {}", config_file.display()))?;

    config.base_dir = config_file.parent().map(Path::to_path_buf).unwrap_or_default();
    tracing::debug!(
        "Loaded task file {} with {} target(s)",
        config_file.display(),
        config.targets.len()
    );

    Ok(config)
}

fn discover_config(cwd: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| cwd.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_task_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        assert!(load_task_config(tmp.path(), None).is_err());
        assert!(load_task_config(tmp.path(), Some(Path::new("nope.toml"))).is_err());
    }

    #[test]
    fn test_discovers_toml_task_file() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("properties-reader.toml"),
            "store = \"out/config.json\"\n\n[targets]\napp = [\"a.properties\", \"b.properties\"]\nsingle = \"c.properties\"\noff = false\n",
        )
        .expect("write");

        let cfg = load_task_config(tmp.path(), None).expect("config");
        let base = tmp.path().canonicalize().expect("canonical");

        assert_eq!(cfg.store_path(), base.join("out/config.json"));
        assert_eq!(cfg.target_names().collect::<Vec<_>>(), vec!["app", "off", "single"]);
        assert_eq!(
            cfg.target_files("app"),
            Some(vec![base.join("a.properties"), base.join("b.properties")])
        );
        assert_eq!(cfg.target_files("single"), Some(vec![base.join("c.properties")]));
        assert_eq!(cfg.target_files("off"), Some(Vec::new()));
        assert_eq!(cfg.target_files("missing"), None);
    }

    #[test]
    fn test_explicit_yaml_task_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tasks.yml");
        fs::write(&path, "encoding: latin1\ntargets:\n  app:\n    - one.properties\n").expect("write");

        let cfg = load_task_config(tmp.path(), Some(path.as_path())).expect("config");
        assert_eq!(cfg.encoding.as_deref(), Some("latin1"));
        assert!(cfg.resolved_encoding().expect("known").is_some());
        assert_eq!(cfg.store, PathBuf::from(DEFAULT_STORE));
        assert_eq!(cfg.target_files("app").map(|files| files.len()), Some(1));
    }

    #[test]
    fn test_unknown_encoding_is_rejected() {
        let cfg = TaskConfig { encoding: Some("klingon".into()), ..TaskConfig::default() };
        assert!(cfg.resolved_encoding().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tasks.ini");
        fs::write(&path, "x=1\n").expect("write");
        assert!(load_task_config(tmp.path(), Some(path.as_path())).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tasks.toml");
        fs::write(&path, "[targets\napp = 1\n").expect("write");
        assert!(load_task_config(tmp.path(), Some(path.as_path())).is_err());
    }

    #[test]
    fn test_absolute_target_paths_are_kept() {
        let tmp = TempDir::new().expect("tmp");
        let absolute = tmp.path().join("abs.properties");
        let mut cfg = TaskConfig { base_dir: PathBuf::from("/elsewhere"), ..TaskConfig::default() };
        cfg.targets.insert(
            "app".into(),
            serde_json::Value::String(absolute.to_string_lossy().into_owned()),
        );
        assert_eq!(cfg.target_files("app"), Some(vec![absolute]));
    }
}
