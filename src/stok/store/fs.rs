use super::RecordStore;
use crate::error::{Result, StokError};
use crate::model::InventoryRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn parent_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StokError::Io)?;
        }
        Ok(())
    }
}

/// Serializes records as a pretty JSON array with 4-space indentation and no
/// trailing newline.
pub fn encode_records(records: &[InventoryRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(StokError::Serialization)?;
    Ok(buf)
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<InventoryRecord>> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.data_file.display(), "no data file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StokError::Io(e)),
        };
        let records: Vec<InventoryRecord> =
            serde_json::from_str(&content).map_err(StokError::Serialization)?;
        debug!(path = %self.data_file.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save_all(&mut self, records: &[InventoryRecord]) -> Result<()> {
        let root = self.parent_dir();
        self.ensure_dir(&root)?;

        let content = encode_records(records)?;
        let file_name = self
            .data_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StokError::Store(format!(
                    "Invalid data file path: {}",
                    self.data_file.display()
                ))
            })?;
        let tmp_file = root.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) =
            fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &self.data_file))
        {
            let _ = fs::remove_file(&tmp_file);
            return Err(StokError::Io(e));
        }

        debug!(path = %self.data_file.display(), count = records.len(), "saved records");
        Ok(())
    }
}
