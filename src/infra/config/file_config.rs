use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, TelephonyConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub telephony: Option<FileTelephonyConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(telephony) = self.telephony {
            telephony.merge_into(&mut config.telephony);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTelephonyConfig {
    pub outbox_dir: Option<PathBuf>,
}

impl FileTelephonyConfig {
    fn merge_into(self, config: &mut TelephonyConfig) {
        if let Some(outbox_dir) = self.outbox_dir {
            config.outbox_dir = Some(outbox_dir);
        }
    }
}
