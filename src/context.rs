use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{LanguageModelService, VersionControlService};
use crate::store::SummaryStore;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub store: Arc<SummaryStore>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
    ) -> Self {
        let store = Arc::new(SummaryStore::new(config.output_dir.clone()));
        Self {
            config,
            version_control,
            language_model,
            store,
        }
    }
}
