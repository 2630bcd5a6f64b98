use std::time::Duration;

use common::{error::AppError, storage::store::DocumentStore, utils::config::AppConfig};

#[derive(Clone)]
pub struct ApiState {
    pub store: DocumentStore,
    pub http_client: reqwest::Client,
    pub config: AppConfig,
}

impl ApiState {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self {
            store: DocumentStore::new(),
            http_client,
            config: config.clone(),
        })
    }
}
