use std::path::Path;

use crate::{
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        error::AppError,
        storage_layout::StorageLayout,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;

    // Re-entrant bootstrap (tests, embedded callers) finds the global
    // subscriber already installed; that is not a startup failure.
    if infra::logging::init(&context.config.logging).is_err() {
        tracing::debug!("logging subscriber already installed");
    }

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;

    Ok(AppContext::new(config, layout))
}
