//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use rollup::{Employee, Order, Project};

/// Scratch directory holding config files for a single test
pub struct ConfigDirBuilder {
    temp_dir: TempDir,
    files: Vec<(PathBuf, String)>,
}

impl ConfigDirBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            files: Vec::new(),
        })
    }

    /// Add a file relative to the scratch directory
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    pub fn build(self) -> Result<ConfigDir> {
        for (path, content) in &self.files {
            let full_path = self.temp_dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }
        Ok(ConfigDir {
            temp_dir: self.temp_dir,
        })
    }
}

pub struct ConfigDir {
    temp_dir: TempDir,
}

impl ConfigDir {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Sample data bundled the way most report tests consume it
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub orders: Vec<Order>,
    pub projects: Vec<Project>,
}

impl Dataset {
    pub fn sample() -> Self {
        use rollup::testing::Fixtures;
        Self {
            employees: Fixtures::employees(),
            orders: Fixtures::orders(),
            projects: Fixtures::projects(),
        }
    }
}

/// Employee ids of a query result, in result order
pub fn ids<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Vec<u64> {
    employees.into_iter().map(|e| e.id).collect()
}
