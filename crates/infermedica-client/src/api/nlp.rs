//! Natural language API.

use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{ParseRequest, ParseResponse};

/// Natural language API client.
pub struct NlpApi {
    client: InfermedicaClient,
}

impl NlpApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// Find observation mentions in free text.
    ///
    /// Text parsing is only available for the default English model, so this
    /// call never sends the client's `Model` header.
    pub async fn parse(&self, request: &ParseRequest) -> Result<ParseResponse> {
        request.validate()?;
        self.client
            .post("parse", request, RequestOptions::new().without_model())
            .await
    }
}
