use std::path::{Path, PathBuf};

use twin_model::ClassModel;

use super::Manifest;
use crate::{Result, load_models};

/// A twin.toml file with its raw content and parsed manifest.
#[derive(Debug)]
pub struct TwinToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TwinToml {
    /// Open and parse a twin.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory the manifest lives in; relative paths resolve against it.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Model file paths, resolved against the manifest's directory.
    pub fn model_paths(&self) -> Vec<PathBuf> {
        self.manifest
            .generator
            .models
            .iter()
            .map(|p| self.dir().join(p))
            .collect()
    }

    /// Parse every model file and build the class model.
    pub fn load_models(&self) -> Result<ClassModel> {
        load_models(self.model_paths())
    }
}
