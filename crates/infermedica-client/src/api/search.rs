//! Search and lookup API.

use super::Query;
use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::{Error, Result};
use crate::tokens::Sex;
use crate::types::{Age, LookupResult, SearchRequest, SearchResult};

/// Search API client.
pub struct SearchApi {
    client: InfermedicaClient,
}

impl SearchApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// Find observations whose names match a phrase.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        request.validate()?;
        let path = Query::new()
            .pair("phrase", &request.phrase)
            .pair("sex", request.sex.as_str())
            .pair("max_results", &request.max_results.to_string())
            .list("types", request.types.iter().map(|t| t.as_str()))
            .age(&request.age)
            .to_path("search");
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Find the single observation that best matches a phrase.
    pub async fn lookup(&self, phrase: &str, sex: Sex, age: Option<&Age>) -> Result<LookupResult> {
        if phrase.trim().is_empty() {
            return Err(Error::InvalidArgument("lookup phrase is empty".to_string()));
        }
        let mut query = Query::new().pair("phrase", phrase).pair("sex", sex.as_str());
        if let Some(age) = age {
            query = query.age(age);
        }
        self.client
            .get(&query.to_path("lookup"), RequestOptions::new())
            .await
    }
}
