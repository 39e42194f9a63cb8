// File: ./src/context.rs
/*! Filesystem context for the application.

Everything that touches disk (the config file, the session log) resolves
its paths through the [`AppContext`] trait instead of hardcoding
locations. Production code uses [`StandardContext`], which maps onto the
platform directories; tests use [`TestContext`], which lives in a unique
temp directory and removes it on drop.

There are deliberately no globals and no environment-variable lookups
here: whoever needs a path takes a `&dyn AppContext` argument, which
keeps tests isolated and parallel-safe.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    /// Where the session log goes. `None` when no data dir is resolvable;
    /// logging is best-effort and callers skip it then.
    fn get_log_file_path(&self) -> Option<PathBuf> {
        self.get_data_dir().ok().map(|p| p.join("flowboard.log"))
    }
}

// --- Production Implementation ---

/// Resolves paths through `directories::ProjectDirs`, or under an
/// explicit root when one is given.
#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(override_root: Option<PathBuf>) -> Self {
        Self { override_root }
    }

    fn created(path: PathBuf) -> Result<PathBuf> {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
        Ok(path)
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "flowboard", "flowboard")
            .ok_or_else(|| anyhow::anyhow!("No home directory"))
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        match &self.override_root {
            Some(root) => Self::created(root.join("data")),
            None => Self::created(Self::project_dirs()?.data_dir().to_path_buf()),
        }
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        match &self.override_root {
            Some(root) => Self::created(root.join("config")),
            None => Self::created(Self::project_dirs()?.config_dir().to_path_buf()),
        }
    }
}

// --- Test Implementation ---

/// Context rooted in a unique directory under the OS temp dir. Created
/// eagerly, removed again when dropped, so parallel tests never share
/// paths.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("flowboard_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("cannot set up test directory");
        Self { root }
    }

    fn subdir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        self.subdir("data")
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.subdir("config")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Cleanup failures are not worth failing a test over.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
