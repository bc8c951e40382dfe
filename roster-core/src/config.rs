//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE_NAME: &str = "roster.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Build configuration, matching the roster.yml schema.
///
/// Every field has a default, so an absent config file describes the
/// standard layout: `profiles/*.md` in, `index.html` as the template, one
/// `<slug>/index.html` per profile out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix appended to every page title
    pub site_name: String,

    pub profiles_dir: PathBuf,

    /// Shared page template
    pub template: PathBuf,

    /// Selector of the template element that receives each profile
    pub container: String,

    pub output_dir: PathBuf,

    /// Extension of profile documents, without the dot
    pub extension: String,

    /// Skip unreadable or malformed profiles instead of aborting the build
    pub keep_going: bool,

    // Internal: project root (for relative path resolution)
    #[serde(skip)]
    root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: String::from("Les Cuvees"),
            profiles_dir: PathBuf::from("profiles"),
            template: PathBuf::from("index.html"),
            container: String::from("article"),
            output_dir: PathBuf::from("."),
            extension: String::from("md"),
            keep_going: false,
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file, resolving paths against `root`
    pub fn from_file<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&contents)?;
        config.root = root.as_ref().to_path_buf();
        Ok(config)
    }

    /// Load `roster.yml` from `root` if it exists, defaults otherwise
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("Using config file {:?}", path);
            Self::from_file(&path, root)
        } else {
            Ok(Self::for_root(root))
        }
    }

    /// Get the profiles directory, resolved against the project root
    pub fn profiles_dir(&self) -> PathBuf {
        self.resolve_path(&self.profiles_dir)
    }

    /// Get the template path, resolved against the project root
    pub fn template_path(&self) -> PathBuf {
        self.resolve_path(&self.template)
    }

    /// Get the output directory, resolved against the project root
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.output_dir)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.site_name, "Les Cuvees");
        assert_eq!(config.container, "article");
        assert_eq!(config.extension, "md");
        assert!(!config.keep_going);
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = Config::for_root("/srv/site");
        assert_eq!(config.profiles_dir(), PathBuf::from("/srv/site/profiles"));
        assert_eq!(config.template_path(), PathBuf::from("/srv/site/index.html"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/."));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let mut config = Config::for_root("/srv/site");
        config.output_dir = PathBuf::from("/var/www");
        assert_eq!(config.output_dir(), PathBuf::from("/var/www"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "site_name: La Compagnie\nkeep_going: true\n",
        )
        .unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.site_name, "La Compagnie");
        assert!(config.keep_going);
        assert_eq!(config.container, "article");
        assert_eq!(config.profiles_dir(), dir.path().join("profiles"));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.template_path(), dir.path().join("index.html"));
        assert_eq!(config.site_name, "Les Cuvees");
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "site_name: [unclosed\n").unwrap();
        assert!(matches!(
            Config::from_file(&path, dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
