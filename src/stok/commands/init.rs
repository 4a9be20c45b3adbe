use crate::commands::{CmdMessage, CmdResult, StokPaths};
use crate::error::Result;
use crate::model::Scope;
use crate::store::RecordStore;

/// Creates an empty data file if there is none. An existing file is only loaded,
/// which checks that it parses, and is left byte-for-byte as it was.
pub fn run<S: RecordStore>(store: &mut S, paths: &StokPaths, scope: Scope) -> Result<CmdResult> {
    let data_file = paths.data_file(scope)?;
    let records = store.load_all()?;

    let mut result = CmdResult::default().with_data_path(data_file.clone());
    if data_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Stok store already present at {} ({} records)",
            data_file.display(),
            records.len()
        )));
    } else {
        store.save_all(&records)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized stok store at {}",
            data_file.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use std::fs;
    use tempfile::TempDir;

    fn project_paths(dir: &TempDir) -> StokPaths {
        StokPaths {
            project: Some(dir.path().to_path_buf()),
            global: dir.path().join("global"),
        }
    }

    #[test]
    fn creates_empty_data_file() {
        let dir = TempDir::new().unwrap();
        let paths = project_paths(&dir);
        let data_file = paths.data_file(Scope::Project).unwrap();
        let mut store = FileStore::new(&data_file);

        let result = run(&mut store, &paths, Scope::Project).unwrap();

        assert_eq!(fs::read_to_string(&data_file).unwrap(), "[]");
        assert_eq!(result.data_path, Some(data_file));
    }

    #[test]
    fn leaves_existing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let paths = project_paths(&dir);
        let data_file = paths.data_file(Scope::Project).unwrap();
        let hand_edited = r#"[["Vida", "40", "Adet"]]"#;
        fs::write(&data_file, hand_edited).unwrap();
        let mut store = FileStore::new(&data_file);

        let result = run(&mut store, &paths, Scope::Project).unwrap();

        assert_eq!(fs::read_to_string(&data_file).unwrap(), hand_edited);
        assert!(result.messages[0].content.contains("1 records"));
    }

    #[test]
    fn existing_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = project_paths(&dir);
        let data_file = paths.data_file(Scope::Project).unwrap();
        fs::write(&data_file, "[[").unwrap();
        let mut store = FileStore::new(&data_file);

        assert!(run(&mut store, &paths, Scope::Project).is_err());
        assert_eq!(fs::read_to_string(&data_file).unwrap(), "[[");
    }
}
