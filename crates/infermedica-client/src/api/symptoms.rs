//! Symptoms API.

use std::time::Duration;

use super::{Query, item_path};
use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{Age, Symptom};

/// The full symptom catalog is large; give it more time than other calls.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Symptoms API client.
pub struct SymptomsApi {
    client: InfermedicaClient,
}

impl SymptomsApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// List all symptoms applicable to a patient of the given age.
    pub async fn list(&self, age: &Age, enable_triage_3: bool) -> Result<Vec<Symptom>> {
        let path = Query::new()
            .age(age)
            .flag("enable_triage_3", enable_triage_3)
            .to_path("symptoms");
        self.client
            .get(&path, RequestOptions::new().timeout(LIST_TIMEOUT))
            .await
    }

    /// Get a symptom by ID.
    pub async fn get(&self, id: &str, age: &Age, enable_triage_3: bool) -> Result<Symptom> {
        let path = Query::new()
            .age(age)
            .flag("enable_triage_3", enable_triage_3)
            .to_path(&item_path("symptoms", id)?);
        self.client.get(&path, RequestOptions::new()).await
    }
}
