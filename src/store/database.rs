use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::integrations::config::IntegrationConfig;
use crate::store::error::StoreError;

/// On-disk layout of the configuration database.
#[derive(Debug, Default, Deserialize, Serialize)]
struct Document {
    #[serde(default)]
    integrations: BTreeMap<String, IntegrationConfig>,
}

/// JSON file holding every integration, keyed by name.
///
/// The file is rewritten as a whole on each insert: the new content goes to
/// a temporary file next to the database and is renamed over it, so the file
/// either holds the new record or is left untouched.
#[derive(Debug)]
pub struct ConfigDatabase {
    path: PathBuf,
    document: Document,
}

impl ConfigDatabase {
    /// Opens the database stored at `path`.
    ///
    /// When the file does not exist and `create_if_missing` is set, an empty
    /// database is returned. Nothing is written until the first
    /// [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the file is missing and `create_if_missing` is false
    /// - [`StoreError::Io`] if the file cannot be read
    /// - [`StoreError::Parse`] if the file is not a valid database
    ///
    /// # Examples
    /// ```rust
    /// use engine_test::store::database::ConfigDatabase;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let db = ConfigDatabase::open(dir.path().join("engine-test.conf"), true).unwrap();
    /// assert!(db.is_empty());
    ///
    /// assert!(ConfigDatabase::open(dir.path().join("missing.conf"), false).is_err());
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn open(path: impl Into<PathBuf>, create_if_missing: bool) -> Result<Self, StoreError> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !create_if_missing {
                    return Err(StoreError::NotFound(path));
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), "Configuration database not found, starting empty");
                Document::default()
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        Ok(ConfigDatabase { path, document })
    }

    /// Inserts a new integration and persists the database.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateIntegration`] if an integration with the same name exists
    /// - [`StoreError::Io`] or [`StoreError::Serialize`] if the database cannot be written
    ///
    /// On error neither the in-memory database nor the file is modified.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(name = %integration.name)))]
    pub fn insert(&mut self, integration: IntegrationConfig) -> Result<(), StoreError> {
        if self.document.integrations.contains_key(&integration.name) {
            return Err(StoreError::DuplicateIntegration(integration.name));
        }

        let name = integration.name.clone();
        self.document.integrations.insert(name.clone(), integration);
        if let Err(e) = self.persist() {
            self.document.integrations.remove(&name);
            return Err(e);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %self.path.display(), "Integration saved");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&IntegrationConfig> {
        self.document.integrations.get(name)
    }

    /// Iterates over the integrations in name order.
    pub fn integrations(&self) -> impl Iterator<Item = &IntegrationConfig> {
        self.document.integrations.values()
    }

    pub fn len(&self) -> usize {
        self.document.integrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.integrations.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let mut content =
            serde_json::to_string_pretty(&self.document).map_err(StoreError::Serialize)?;
        content.push('\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let io_err = |e: io::Error| StoreError::io(&self.path, e);
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
