//! Risk factors API.

use super::{Query, item_path};
use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{Age, RiskFactor};

/// Risk factors API client.
pub struct RiskFactorsApi {
    client: InfermedicaClient,
}

impl RiskFactorsApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// List all risk factors applicable to a patient of the given age.
    pub async fn list(&self, age: &Age, enable_triage_3: bool) -> Result<Vec<RiskFactor>> {
        let path = Query::new()
            .age(age)
            .flag("enable_triage_3", enable_triage_3)
            .to_path("risk_factors");
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Get a risk factor by ID.
    pub async fn get(&self, id: &str, age: &Age) -> Result<RiskFactor> {
        let path = Query::new()
            .age(age)
            .to_path(&item_path("risk_factors", id)?);
        self.client.get(&path, RequestOptions::new()).await
    }
}
