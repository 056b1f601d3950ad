//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    roadmap::{PlaceholderRoadmap, RoadmapSource},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    roadmap: Option<Arc<dyn RoadmapSource>>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tempo/tempo.db` or `~/.local/share/tempo/tempo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the source used to draft roadmaps for new goals.
    ///
    /// Defaults to [`PlaceholderRoadmap`].
    pub fn with_roadmap_source(mut self, source: Arc<dyn RoadmapSource>) -> Self {
        self.roadmap = Some(source);
        self
    }

    /// Builds the configured tracker, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created, `TrackerError::XdgDirectory` if no default path can be
    /// resolved and `TrackerError::Database` if schema setup fails.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let roadmap = self
            .roadmap
            .unwrap_or_else(|| Arc::new(PlaceholderRoadmap));
        let tracker = Tracker::new(db_path, roadmap);

        // Open once so schema errors surface at startup
        tracker.with_db(|_db: &mut Database| Ok(())).await?;

        Ok(tracker)
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tempo")
            .place_data_file("tempo.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
