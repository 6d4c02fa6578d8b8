//! Conditions API.

use super::{Query, item_path};
use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{Age, Condition};

/// Conditions API client.
pub struct ConditionsApi {
    client: InfermedicaClient,
}

impl ConditionsApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// List all conditions applicable to a patient of the given age.
    pub async fn list(&self, age: &Age, enable_triage_3: bool) -> Result<Vec<Condition>> {
        let path = Query::new()
            .age(age)
            .flag("enable_triage_3", enable_triage_3)
            .to_path("conditions");
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Get a condition by ID.
    pub async fn get(&self, id: &str, age: &Age, enable_triage_3: bool) -> Result<Condition> {
        let path = Query::new()
            .age(age)
            .flag("enable_triage_3", enable_triage_3)
            .to_path(&item_path("conditions", id)?);
        self.client.get(&path, RequestOptions::new()).await
    }
}
