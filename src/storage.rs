//! Persistence of accepted nicknames.
//!
//! Batches are appended to a plain text file as space-separated names. The
//! file is opened in append mode for every write and created if absent, so
//! repeated runs keep adding to the same list.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Append-only destination for batches of names.
pub trait NameSink {
    fn append(&mut self, chunk: &str) -> io::Result<()>;
}

/// Appends batches to a file on disk.
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NameSink for AppendFile {
    fn append(&mut self, chunk: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(chunk.as_bytes())?;
        file.flush()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_and_extends_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(".generated_nicks");
        let mut sink = AppendFile::new(&path);

        sink.append(" Dog r1ver").unwrap();
        sink.append(" _cat_").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), " Dog r1ver _cat_");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names");
        std::fs::write(&path, " old").unwrap();

        AppendFile::new(&path).append(" new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), " old new");
    }
}
