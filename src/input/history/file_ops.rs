use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Lines in file order, blank lines skipped. A missing file is empty;
    /// bytes that are not valid UTF-8 are replaced.
    pub fn load_entries(&self) -> Result<Vec<String>, HistoryError> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = BufReader::new(File::open(&self.file_path)?);
        let mut entries = Vec::new();
        let mut raw = Vec::new();
        while reader.read_until(b'\n', &mut raw)? > 0 {
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);
            if !line.trim().is_empty() {
                entries.push(line.to_string());
            }
            raw.clear();
        }
        Ok(entries)
    }

    /// Rewrites the whole file, one entry per line.
    pub fn write_entries<'a>(
        &self,
        entries: impl Iterator<Item = &'a str>,
    ) -> Result<(), HistoryError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.file_path)?);
        for entry in entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}
