// src/source.rs - Where the document comes from and where it is written back

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("{0}: no such file")]
    NotFound(PathBuf),
    #[error("{0} is a directory")]
    IsDirectory(PathBuf),
    #[error("{path}: {ch:?} cannot be written as Latin-1")]
    Unencodable { path: PathBuf, ch: char },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Initial content and persistence for one document.
pub trait Source {
    /// Lines without terminators, tabs already expanded.
    fn load(&mut self) -> Result<Vec<String>, SourceError>;

    fn save(&mut self, lines: &[String]) -> Result<(), SourceError>;

    /// Short name for the status line.
    fn name(&self) -> String;
}

/// How a file's bytes map to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// One character per byte. Used for files that are not valid UTF-8 so
    /// untouched bytes are written back unchanged.
    Latin1,
}

pub struct FileSource {
    path: PathBuf,
    tab_width: usize,
    encoding: Encoding,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P, tab_width: usize) -> Self {
        Self {
            path: expand_home(path.as_ref()),
            tab_width,
            encoding: Encoding::Utf8,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decided by the last `load`.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn decode(&mut self, bytes: Vec<u8>) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => {
                self.encoding = Encoding::Utf8;
                text
            }
            Err(e) => {
                log::warn!("{} is not UTF-8, reading it as Latin-1", self.path.display());
                self.encoding = Encoding::Latin1;
                e.into_bytes().into_iter().map(char::from).collect()
            }
        }
    }

    fn encode(&self, content: String) -> Result<Vec<u8>, SourceError> {
        match self.encoding {
            Encoding::Utf8 => Ok(content.into_bytes()),
            Encoding::Latin1 => content
                .chars()
                .map(|ch| {
                    u8::try_from(ch).map_err(|_| SourceError::Unencodable {
                        path: self.path.clone(),
                        ch,
                    })
                })
                .collect(),
        }
    }

    fn io_error(&self, source: io::Error) -> SourceError {
        match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(self.path.clone()),
            _ => SourceError::Io {
                path: self.path.clone(),
                source,
            },
        }
    }
}

impl Source for FileSource {
    fn load(&mut self) -> Result<Vec<String>, SourceError> {
        let metadata = fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        if metadata.is_dir() {
            return Err(SourceError::IsDirectory(self.path.clone()));
        }
        let bytes = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let content = self.decode(bytes);
        let lines = split_lines(&content, self.tab_width);
        log::info!("loaded {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn save(&mut self, lines: &[String]) -> Result<(), SourceError> {
        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        let bytes = self.encode(content)?;
        fs::write(&self.path, bytes).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// A source held in memory. Clones share the same storage, so a test can
/// keep one handle and inspect what the session saved through another.
#[derive(Clone, Default)]
pub struct MemorySource {
    name: String,
    lines: Arc<Mutex<Vec<String>>>,
    saves: Arc<Mutex<usize>>,
    fail_saves: bool,
}

impl MemorySource {
    pub fn new<I, S>(name: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            lines: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            saves: Arc::new(Mutex::new(0)),
            fail_saves: false,
        }
    }

    /// Make every `save` fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn contents(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

impl Source for MemorySource {
    fn load(&mut self) -> Result<Vec<String>, SourceError> {
        Ok(self.contents())
    }

    fn save(&mut self, lines: &[String]) -> Result<(), SourceError> {
        if self.fail_saves {
            return Err(SourceError::Io {
                path: PathBuf::from(&self.name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only source"),
            });
        }
        if let Ok(mut stored) = self.lines.lock() {
            *stored = lines.to_vec();
        }
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Split file content into lines the buffer accepts.
///
/// A final newline does not start another line, `\r\n` endings lose their
/// `\r`, and each tab becomes `tab_width` spaces.
pub fn split_lines(content: &str, tab_width: usize) -> Vec<String> {
    content
        .lines()
        .map(|line| expand_tabs(line, tab_width))
        .collect()
}

pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    line.replace('\t', &" ".repeat(tab_width))
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
