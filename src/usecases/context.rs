use std::path::PathBuf;

use crate::infra::{config::AppConfig, storage_layout::StorageLayout};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub layout: StorageLayout,
}

impl AppContext {
    pub fn new(config: AppConfig, layout: StorageLayout) -> Self {
        Self { config, layout }
    }

    /// Outbox directory the transport writes to: the configured override,
    /// or the storage-layout default.
    pub fn outbox_dir(&self) -> PathBuf {
        self.config
            .telephony
            .outbox_dir
            .clone()
            .unwrap_or_else(|| self.layout.outbox_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn outbox_dir_defaults_to_the_storage_layout() {
        let _guard = crate::test_support::env_lock();

        let layout = StorageLayout::resolve().expect("layout should resolve");
        let context = AppContext::new(AppConfig::default(), layout.clone());

        assert_eq!(context.outbox_dir(), layout.outbox_dir);
    }

    #[test]
    fn configured_outbox_dir_wins_over_the_layout() {
        let _guard = crate::test_support::env_lock();

        let layout = StorageLayout::resolve().expect("layout should resolve");
        let mut config = AppConfig::default();
        config.telephony.outbox_dir = Some(PathBuf::from("/tmp/custom-outbox"));

        let context = AppContext::new(config, layout);

        assert_eq!(context.outbox_dir(), Path::new("/tmp/custom-outbox"));
    }
}
