//! Concepts API.

use super::{Query, item_path};
use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{Concept, ConceptsQuery};

/// Concepts API client.
///
/// Concepts cover every knowledge-base entry regardless of kind.
pub struct ConceptsApi {
    client: InfermedicaClient,
}

impl ConceptsApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// List all concepts.
    pub async fn list(&self) -> Result<Vec<Concept>> {
        self.list_with_query(&ConceptsQuery::default()).await
    }

    /// List concepts filtered by ID and/or kind.
    pub async fn list_with_query(&self, query: &ConceptsQuery) -> Result<Vec<Concept>> {
        let path = Query::new()
            .list("ids", &query.ids)
            .list("types", query.types.iter().map(|t| t.as_str()))
            .to_path("concepts");
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Get a concept by ID.
    pub async fn get(&self, id: &str) -> Result<Concept> {
        let path = item_path("concepts", id)?;
        self.client.get(&path, RequestOptions::new()).await
    }
}
