use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::chatbot::Intent;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MetricsData {
    pub total_replies: u64,
    pub rejected_requests: u64,
    pub intent_usage: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_reply(&self, intent: Intent) {
        let mut data = self.inner.write().await;
        data.total_replies += 1;
        *data.intent_usage.entry(intent.as_str().to_string()).or_insert(0) += 1;
    }

    pub async fn record_rejection(&self) {
        self.inner.write().await.rejected_requests += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
