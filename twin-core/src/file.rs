use std::{
    io,
    path::{Path, PathBuf},
};

/// Trait for types that represent a generated source file
pub trait GeneratedFile {
    /// Get the file path relative to the source root
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a [`File`] snapshot that can be written later
    fn to_file(&self) -> File {
        File::new(self.path(), self.render())
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

impl WriteResult {
    /// Returns true if the file was left untouched.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// A rendered file, ready to be written below a base directory.
///
/// Files are never overwritten: an existing file at the target path is
/// left untouched and reported as [`WriteResult::Skipped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path relative to the base directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Resolve the target path below `base`
    pub fn target(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Check if the file already exists below `base`
    pub fn exists(&self, base: &Path) -> bool {
        self.target(base).exists()
    }

    /// Write the file below `base` unless it already exists
    pub fn write(&self, base: &Path) -> io::Result<WriteResult> {
        let target = self.target(base);
        if target.exists() {
            tracing::debug!(path = %target.display(), "file exists, skipping");
            return Ok(WriteResult::Skipped);
        }
        write_file(&target, &self.content)?;
        tracing::debug!(path = %target.display(), "file written");
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self) -> PathBuf {
            PathBuf::from("com/acme/Greeting.java")
        }

        fn render(&self) -> String {
            "class Greeting {}\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_creates_new() {
        let temp = TempDir::new().unwrap();
        let file = File::new("com/acme/New.java", "new content");

        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("com/acme/New.java")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_file_write_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Existing.java");
        fs::write(&path, "original").unwrap();

        let file = File::new("Existing.java", "should not write");
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert!(result.is_skipped());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_second_write_is_skipped() {
        let temp = TempDir::new().unwrap();
        let file = File::new("x/Y.java", "first");

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
    }

    #[test]
    fn test_generated_file_to_file() {
        let file = Greeting.to_file();
        assert_eq!(file.path(), Path::new("com/acme/Greeting.java"));
        assert_eq!(file.content(), "class Greeting {}\n");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let file = File::new("test.txt", "content");

        assert!(!file.exists(temp.path()));
        fs::write(temp.path().join("test.txt"), "x").unwrap();
        assert!(file.exists(temp.path()));
    }
}
