use crate::commands::{CmdMessage, CmdResult, StokPaths};
use crate::config::StokConfig;
use crate::error::{Result, StokError};
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StokPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    match action {
        ConfigAction::ShowAll => {
            let config = StokConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StokConfig::load(&dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| StokError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = StokConfig::load(&dir)?;
            config.set(&key, &value)?;
            config.save(&dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Unit;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> StokPaths {
        StokPaths {
            project: Some(dir.path().to_path_buf()),
            global: dir.path().join("global"),
        }
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("default-unit".into(), "adet".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "default-unit set to Adet");

        let loaded = StokConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_unit, Unit::Adet);
    }

    #[test]
    fn show_key_prints_value() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            Scope::Project,
            ConfigAction::ShowKey("data-file".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "products.json");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            Scope::Project,
            ConfigAction::ShowKey("colour".into()),
        );
        assert!(matches!(result, Err(StokError::Config(_))));
    }

    #[test]
    fn invalid_value_is_an_error_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            Scope::Project,
            ConfigAction::Set("default-unit".into(), "litre".into()),
        );
        assert!(matches!(result, Err(StokError::Config(_))));
        assert!(!dir.path().join("stok.json").exists());
    }
}
