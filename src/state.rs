use reqwest::Client;
use std::{sync::Arc, time::Duration};
use tokio::sync::RwLock;

use crate::{
    config::AppConfig,
    repositories::records::seed_records,
    services::gemini::{AdvisorClient, GeminiClient},
    structs::{records::SalesRecord, settings::DashboardSettings},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub records: Arc<RwLock<Vec<SalesRecord>>>,
    pub settings: Arc<RwLock<DashboardSettings>>,
    pub advisor: Arc<dyn AdvisorClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_records(config, seed_records())
    }

    pub fn with_records(config: AppConfig, records: Vec<SalesRecord>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(
                    "failed to build http client with {}s timeout, using defaults: {}",
                    config.request_timeout_secs,
                    err
                );
                Client::new()
            });
        let advisor = Arc::new(GeminiClient::new(http_client, &config));

        Self {
            config: Arc::new(config),
            records: Arc::new(RwLock::new(records)),
            settings: Arc::new(RwLock::new(DashboardSettings::default())),
            advisor,
        }
    }

    /// 換掉 AI client，測試用
    pub fn with_advisor(mut self, advisor: Arc<dyn AdvisorClient>) -> Self {
        self.advisor = advisor;
        self
    }
}
