use crate::config::StokConfig;
use crate::error::{Result, StokError};
use crate::index::DisplayRecord;
use crate::model::Scope;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod paths;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub struct StokPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl StokPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| StokError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }

    /// Full path of the record file for `scope`, honoring its `data-file` setting.
    pub fn data_file(&self, scope: Scope) -> Result<PathBuf> {
        let dir = self.scope_dir(scope)?;
        let config = StokConfig::load(&dir)?;
        Ok(dir.join(config.data_file))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Which mutating action produced a result. UIs style each one distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub action: Option<Action>,
    pub affected_records: Vec<DisplayRecord>,
    /// The projection to render after this command.
    pub listed_records: Vec<DisplayRecord>,
    /// The entry form should be emptied (after a successful add or update).
    pub clear_form: bool,
    pub data_path: Option<PathBuf>,
    pub config: Option<StokConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn warning(content: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::warning(content));
        result
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: StokConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn clearing_form(mut self) -> Self {
        self.clear_form = true;
        self
    }
}
