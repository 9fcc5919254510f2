use crate::crawlers::Crawler;
use crate::error::IndexError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Lists the files of a single directory (no recursion)
#[derive(Debug, Clone)]
pub struct FilesystemCrawler {
    root: PathBuf,
}

impl FilesystemCrawler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Crawler for FilesystemCrawler {
    fn list(&self) -> Result<Vec<String>, IndexError> {
        let entries = fs::read_dir(&self.root).map_err(|source| IndexError::Scan {
            path: self.root.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    ::log::debug!("Skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => ::log::debug!("Skipping non UTF-8 file name: {:?}", raw),
            }
        }

        Ok(names)
    }

    fn fetch(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}
