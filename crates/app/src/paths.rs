//! Platform paths for settings and logs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the application keeps its writable files.
///
/// Layout below the base path: `<studio>/<project_id>/{settings,logs}/`.
#[derive(Debug, Clone)]
pub struct PathContext {
    base_path: Arc<Path>,
    studio: String,
    project_id: String,
    app_id: &'static str,
}

impl PathContext {
    /// Uses the platform's local data directory, falling back to the working
    /// directory on platforms without one.
    pub fn new(
        studio: impl Into<String>,
        project_id: impl Into<String>,
        app_id: &'static str,
    ) -> Self {
        let base_path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_path(base_path, studio, project_id, app_id)
    }

    pub fn with_base_path(
        base_path: PathBuf,
        studio: impl Into<String>,
        project_id: impl Into<String>,
        app_id: &'static str,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            studio: studio.into(),
            project_id: project_id.into(),
            app_id,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn studio(&self) -> &str {
        &self.studio
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn app_id(&self) -> &str {
        self.app_id
    }

    /// `<base>/<studio>/<project_id>`
    pub fn project_root(&self) -> PathBuf {
        self.base_path.join(&self.studio).join(&self.project_id)
    }

    pub fn settings_dir(&self) -> PathBuf {
        self.project_root().join("settings")
    }

    /// RON delta file read by the settings store.
    pub fn settings_file(&self) -> PathBuf {
        self.settings_dir().join("settings.ron")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.project_root().join("logs")
    }

    /// `<logs>/<app_id>.<timestamp>.log`
    pub fn log_file(&self, timestamp: &str) -> PathBuf {
        self.logs_dir()
            .join(format!("{}.{}.log", self.app_id, timestamp))
    }

    pub fn log_file_now(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        self.log_file(&timestamp)
    }

    pub fn ensure_directories(&self) -> std::io::Result<()> {
        for dir in [self.settings_dir(), self.logs_dir()] {
            if !dir.exists() {
                std::fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_below_base_path() {
        let ctx = PathContext::with_base_path(
            PathBuf::from("/test/base"),
            "studio",
            "folio",
            "portfolio",
        );

        assert_eq!(ctx.project_root(), PathBuf::from("/test/base/studio/folio"));
        assert_eq!(
            ctx.settings_file(),
            PathBuf::from("/test/base/studio/folio/settings/settings.ron")
        );
        assert_eq!(
            ctx.log_file("20240101-120000"),
            PathBuf::from("/test/base/studio/folio/logs/portfolio.20240101-120000.log")
        );
    }

    #[test]
    fn ensure_directories_creates_settings_and_logs() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = PathContext::with_base_path(temp.path().to_path_buf(), "s", "p", "a");

        ctx.ensure_directories().unwrap();
        assert!(ctx.settings_dir().is_dir());
        assert!(ctx.logs_dir().is_dir());

        // second call is a no-op
        ctx.ensure_directories().unwrap();
    }
}
