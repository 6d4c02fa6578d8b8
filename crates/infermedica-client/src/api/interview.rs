//! Interview API.
//!
//! The stateless endpoints that drive a symptom-checking interview. Every call
//! carries the full patient description; correlate calls of one interview by
//! building the client with an interview ID.

use crate::client::{InfermedicaClient, RequestOptions};
use crate::error::Result;
use crate::types::{
    DiagnosisRequest, DiagnosisResponse, ExplainRequest, ExplainResponse, ObservationRequest,
    RationaleResponse, RecommendSpecialistRequest, RecommendSpecialistResponse, SuggestRequest,
    Suggestion, TriageRequest, TriageResponse,
};

/// Interview API client.
pub struct InterviewApi {
    client: InfermedicaClient,
}

impl InterviewApi {
    pub(crate) fn new(client: InfermedicaClient) -> Self {
        Self { client }
    }

    /// Rank conditions and pick the next question.
    pub async fn diagnosis(&self, request: &DiagnosisRequest) -> Result<DiagnosisResponse> {
        request.validate()?;
        self.client
            .post("diagnosis", request, RequestOptions::new())
            .await
    }

    /// Assess how urgently the patient needs care.
    pub async fn triage(&self, request: &TriageRequest) -> Result<TriageResponse> {
        request.validate()?;
        self.client
            .post("triage", request, RequestOptions::new())
            .await
    }

    /// Suggest further observations to ask about.
    pub async fn suggest(&self, request: &SuggestRequest) -> Result<Vec<Suggestion>> {
        request.validate()?;
        self.client
            .post("suggest", request, RequestOptions::new())
            .await
    }

    /// Show which evidence speaks for and against a condition.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse> {
        request.validate()?;
        self.client
            .post("explain", request, RequestOptions::new())
            .await
    }

    /// Explain why `diagnosis` asked its latest question.
    pub async fn rationale(&self, request: &ObservationRequest) -> Result<RationaleResponse> {
        request.validate()?;
        self.client
            .post("rationale", request, RequestOptions::new())
            .await
    }

    /// Recommend a specialist and a consultation channel.
    pub async fn recommend_specialist(
        &self,
        request: &RecommendSpecialistRequest,
    ) -> Result<RecommendSpecialistResponse> {
        request.validate()?;
        self.client
            .post("recommend_specialist", request, RequestOptions::new())
            .await
    }
}
