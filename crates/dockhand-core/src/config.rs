use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{COMPOSE_PROGRAM, CONFIG_DIR, CONFIG_FILE};

/// The project registry. Loaded once per invocation and immutable
/// afterwards; `projects` iterates in name order, which fixes the order
/// `--all` acts in.
#[derive(Debug, Deserialize)]
pub struct Configuration {
    /// Project name to the directory holding its compose descriptor.
    pub projects: BTreeMap<String, PathBuf>,
    /// Compose binary to invoke; override for podman-compose and friends.
    #[serde(default = "default_compose_bin")]
    pub compose_bin: String,
}

fn default_compose_bin() -> String {
    COMPOSE_PROGRAM.to_string()
}

/// A target name with no entry in the registry. Raised at lookup time
/// inside a handler, not up front.
#[derive(Debug, Error)]
#[error("unknown project '{0}'")]
pub struct UnknownProject(pub String);

impl Configuration {
    /// Loads the registry found under `cwd`. Fails before any target
    /// processing when the file is absent, unreadable, or not the
    /// expected JSON shape.
    pub fn load(cwd: &Path) -> Result<Self> {
        let path = Self::path_under(cwd);
        if !path.exists() {
            bail!("configuration file not found: {}", path.display());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let cfg = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("failed to parse JSON config: {}", path.display()))?;
        Ok(cfg)
    }

    /// The fixed registry location below a working directory.
    pub fn path_under(cwd: &Path) -> PathBuf {
        cwd.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn project_root(&self, name: &str) -> Result<&Path, UnknownProject> {
        self.projects
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| UnknownProject(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(cwd: &Path, body: &str) {
        let path = Configuration::path_under(cwd);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn loads_projects_from_json() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"{"projects": {"api": "/srv/api", "web": "/srv/web"}}"#,
        );

        let cfg = Configuration::load(dir.path()).expect("config should load");
        assert_eq!(cfg.projects.len(), 2);
        assert_eq!(cfg.projects["api"], PathBuf::from("/srv/api"));
        assert_eq!(cfg.compose_bin, COMPOSE_PROGRAM);
    }

    #[test]
    fn compose_bin_override_is_respected() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            r#"{"projects": {}, "compose_bin": "/opt/bin/podman-compose"}"#,
        );

        let cfg = Configuration::load(dir.path()).expect("config should load");
        assert_eq!(cfg.compose_bin, "/opt/bin/podman-compose");
    }

    #[test]
    fn missing_file_is_a_clear_error() {
        let dir = tempdir().unwrap();
        let err = Configuration::load(dir.path()).expect_err("must fail");
        assert!(err.to_string().contains("configuration file not found"));
    }

    #[test]
    fn malformed_json_fails_to_parse() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "{not json");

        let err = Configuration::load(dir.path()).expect_err("must fail");
        assert!(err.to_string().contains("failed to parse JSON config"));
    }

    #[test]
    fn missing_projects_key_fails_to_parse() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"services": {}}"#);

        let err = Configuration::load(dir.path()).expect_err("must fail");
        assert!(err.root_cause().to_string().contains("projects"));
    }

    #[test]
    fn unknown_project_lookup_fails_by_name() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), r#"{"projects": {"api": "/srv/api"}}"#);

        let cfg = Configuration::load(dir.path()).unwrap();
        assert!(cfg.project_root("api").is_ok());

        let err = cfg.project_root("ghost").expect_err("must fail");
        assert_eq!(err.to_string(), "unknown project 'ghost'");
    }
}
