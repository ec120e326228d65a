use crate::model::RiskModel;
use crate::pages::PageStore;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub pages_dir: PathBuf,
}

/// Shared read-only state: the startup-loaded classifier and the static
/// pages. No mutation after construction, so requests need no coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    pub model: RiskModel,
    pub pages: PageStore,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let model = RiskModel::load(&config.model_path)?;
        let pages = PageStore::load(&config.pages_dir)?;
        log::info!(
            "loaded model artifact {} (features: {})",
            config.model_path.display(),
            model.feature_names().join(", ")
        );
        Ok(AppState { model, pages })
    }
}
