use crate::commands::{CmdResult, StokPaths};
use crate::error::Result;
use crate::model::Scope;

pub fn run(paths: &StokPaths, scope: Scope) -> Result<CmdResult> {
    let data_file = paths.data_file(scope)?;
    Ok(CmdResult::default().with_data_path(data_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StokConfig;
    use tempfile::TempDir;

    #[test]
    fn follows_configured_file_name() {
        let dir = TempDir::new().unwrap();
        let mut config = StokConfig::default();
        config.set("data-file", "depo.json").unwrap();
        config.save(dir.path()).unwrap();

        let paths = StokPaths {
            project: Some(dir.path().to_path_buf()),
            global: dir.path().join("global"),
        };
        let result = run(&paths, Scope::Project).unwrap();
        assert_eq!(result.data_path, Some(dir.path().join("depo.json")));
    }

    #[test]
    fn missing_project_scope_is_an_error() {
        let paths = StokPaths {
            project: None,
            global: std::env::temp_dir(),
        };
        assert!(run(&paths, Scope::Project).is_err());
    }
}
