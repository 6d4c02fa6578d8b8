//! Request and response types for the Infermedica API.
//!
//! These types mirror the upstream JSON schema. Enumerated fields use the
//! closed sets from [`crate::tokens`], so an out-of-set value is rejected
//! while the request is being built rather than by the server.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tokens::{
    Acuteness, AgeUnit, ConceptType, DurationUnit, EvidenceChoiceId, EvidenceSource,
    InterviewMode, Prevalence, QuestionType, RationaleType, RecommendedChannel, RootCause,
    SearchType, Seriousness, Severity, Sex, SexFilter, SuggestMethod, TriageLevel,
};

// ─────────────────────────────────────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────────────────────────────────────

/// Patient age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub value: i32,
    #[serde(default)]
    pub unit: AgeUnit,
}

impl Age {
    pub fn years(value: i32) -> Self {
        Self {
            value,
            unit: AgeUnit::Year,
        }
    }

    pub fn months(value: i32) -> Self {
        Self {
            value,
            unit: AgeUnit::Month,
        }
    }
}

/// How long an observation has lasted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDuration {
    pub value: f64,
    pub unit: DurationUnit,
}

/// A single reported observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Observation ID (symptom, risk factor or lab test result).
    pub id: String,
    pub choice_id: EvidenceChoiceId,
    /// When the observation was made (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EvidenceSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EvidenceDuration>,
}

impl Evidence {
    pub fn new(id: impl Into<String>, choice_id: EvidenceChoiceId) -> Self {
        Self {
            id: id.into(),
            choice_id,
            observed_at: None,
            source: None,
            duration: None,
        }
    }

    pub fn present(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceChoiceId::Present)
    }

    pub fn absent(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceChoiceId::Absent)
    }

    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceChoiceId::Unknown)
    }

    /// Mark the interview step that produced this evidence.
    pub fn with_source(mut self, source: EvidenceSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_duration(mut self, value: f64, unit: DurationUnit) -> Self {
        self.duration = Some(EvidenceDuration { value, unit });
        self
    }

    pub fn observed_at(mut self, timestamp: impl Into<String>) -> Self {
        self.observed_at = Some(timestamp.into());
        self
    }
}

/// Reject evidence entries without an observation ID.
fn validate_evidence(evidence: &[Evidence]) -> Result<()> {
    match evidence.iter().position(|e| e.id.trim().is_empty()) {
        Some(index) => Err(Error::InvalidArgument(format!(
            "evidence[{}] has an empty id",
            index
        ))),
        None => Ok(()),
    }
}

/// Reference to an observation or condition by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Observation requests (triage, rationale, explain, lab test recommendation)
// ─────────────────────────────────────────────────────────────────────────────

/// Optional flags shared by the observation-based endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationExtras {
    /// Accept evidence with a `duration`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_symptom_duration: bool,
    /// Use the legacy 3-level triage.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_triage_3: bool,
}

impl ObservationExtras {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Patient description plus reported evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRequest {
    pub sex: Sex,
    pub age: Age,
    /// Evaluation date (ISO 8601), defaults to now upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<String>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "ObservationExtras::is_empty")]
    pub extras: ObservationExtras,
}

impl ObservationRequest {
    pub fn new(sex: Sex, age: Age) -> Self {
        Self {
            sex,
            age,
            evaluated_at: None,
            evidence: Vec::new(),
            extras: ObservationExtras::default(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Evidence>) -> Self {
        self.evidence.extend(evidence);
        self
    }

    pub fn evaluated_at(mut self, date: impl Into<String>) -> Self {
        self.evaluated_at = Some(date.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_evidence(&self.evidence)
    }
}

/// Request for `triage`.
pub type TriageRequest = ObservationRequest;

/// Request for `lab_tests/recommend`.
pub type LabTestsRequest = ObservationRequest;

/// Request for `explain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainRequest {
    #[serde(flatten)]
    pub observation: ObservationRequest,
    /// ID of the condition to explain.
    pub target: String,
}

impl ExplainRequest {
    pub fn new(observation: ObservationRequest, target: impl Into<String>) -> Self {
        Self {
            observation,
            target: target.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(Error::InvalidArgument("explain target is empty".to_string()));
        }
        self.observation.validate()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Diagnosis
// ─────────────────────────────────────────────────────────────────────────────

/// Options for `diagnosis`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisExtras {
    /// Only return questions of type `single`.
    #[serde(default)]
    pub disable_groups: bool,
    /// Use the legacy 3-level triage.
    #[serde(default)]
    pub enable_triage_3: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_mode: Option<InterviewMode>,
    /// Return every condition instead of the adaptive top ranking.
    #[serde(default)]
    pub disable_adaptive_ranking: bool,
    /// Attach explication/instruction to questions where available.
    #[serde(default)]
    pub enable_explanations: bool,
    #[serde(default)]
    pub enable_third_person_questions: bool,
    /// Attach `condition_details` to every ranked condition.
    #[serde(default)]
    pub include_condition_details: bool,
    /// Skip intimate concepts such as sexual activity.
    #[serde(default)]
    pub disable_intimate_content: bool,
    /// Allow questions of type `duration`.
    #[serde(default)]
    pub enable_symptom_duration: bool,
}

/// Request for `diagnosis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub sex: Sex,
    pub age: Age,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<String>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub extras: DiagnosisExtras,
}

impl DiagnosisRequest {
    pub fn new(sex: Sex, age: Age) -> Self {
        Self {
            sex,
            age,
            evaluated_at: None,
            evidence: Vec::new(),
            extras: DiagnosisExtras::default(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Evidence>) -> Self {
        self.evidence.extend(evidence);
        self
    }

    pub fn with_extras(mut self, extras: DiagnosisExtras) -> Self {
        self.extras = extras;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_evidence(&self.evidence)
    }
}

/// One answer option of a question item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionChoice {
    pub id: EvidenceChoiceId,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub choices: Vec<QuestionChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explication: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instruction: Vec<String>,
}

/// Next question of the interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub items: Vec<QuestionItem>,
    /// Set for `duration` questions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_id: Option<String>,
    #[serde(default)]
    pub extras: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Extra condition data returned when `include_condition_details` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionDetails {
    #[serde(default)]
    pub icd10_code: Option<String>,
    #[serde(default)]
    pub category: Option<ConditionCategory>,
    #[serde(default)]
    pub prevalence: Option<Prevalence>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub acuteness: Option<Acuteness>,
    #[serde(default)]
    pub triage_level: Option<TriageLevel>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub has_patient_education: bool,
}

/// A ranked condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCondition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_details: Option<ConditionDetails>,
}

/// Response from `diagnosis`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    /// Absent once the interview should stop.
    #[serde(default)]
    pub question: Option<Question>,
    #[serde(default)]
    pub conditions: Vec<RankedCondition>,
    #[serde(default)]
    pub should_stop: Option<bool>,
    #[serde(default)]
    pub has_emergency_evidence: bool,
    #[serde(default)]
    pub extras: serde_json::Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Explain and rationale
// ─────────────────────────────────────────────────────────────────────────────

/// Response from `explain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    #[serde(default)]
    pub supporting_evidence: Vec<EntityRef>,
    #[serde(default)]
    pub conflicting_evidence: Vec<EntityRef>,
    #[serde(default)]
    pub unconfirmed_evidence: Vec<EntityRef>,
}

/// Response from `rationale`: why the last question was asked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationaleResponse {
    #[serde(rename = "type")]
    pub kind: RationaleType,
    #[serde(default)]
    pub observation_params: Vec<EntityRef>,
    #[serde(default)]
    pub condition_params: Vec<EntityRef>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Suggest
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestExtras {
    /// Expand suggestions with explication and instruction.
    #[serde(default)]
    pub enable_explanations: bool,
}

/// Request for `suggest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub sex: Sex,
    pub age: Age,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Upstream default is `symptoms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest_method: Option<SuggestMethod>,
    #[serde(default)]
    pub extras: SuggestExtras,
}

impl SuggestRequest {
    pub fn new(sex: Sex, age: Age) -> Self {
        Self {
            sex,
            age,
            evidence: Vec::new(),
            suggest_method: None,
            extras: SuggestExtras::default(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Evidence>) -> Self {
        self.evidence.extend(evidence);
        self
    }

    pub fn with_method(mut self, method: SuggestMethod) -> Self {
        self.suggest_method = Some(method);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_evidence(&self.evidence)
    }
}

/// One suggested observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    /// Only with `enable_explanations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explication: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instruction: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Triage
// ─────────────────────────────────────────────────────────────────────────────

/// A reported observation that influenced triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriousObservation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    pub seriousness: Seriousness,
    #[serde(default)]
    pub is_emergency: bool,
}

/// Response from `triage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub triage_level: TriageLevel,
    #[serde(default)]
    pub serious: Vec<SeriousObservation>,
    #[serde(default)]
    pub teleconsultation_applicable: bool,
    /// Raw upstream token. Kept as text so new causes still decode.
    #[serde(default)]
    pub root_cause: Option<String>,
}

impl TriageResponse {
    /// `root_cause` as a [`RootCause`], or `None` when absent or unlisted.
    pub fn known_root_cause(&self) -> Option<RootCause> {
        self.root_cause
            .as_deref()
            .and_then(|cause| cause.parse().ok())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Specialist recommendation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendSpecialistExtras {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_symptom_duration: bool,
    /// Maps upstream specialist IDs onto the caller's own.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub specialist_mapping: HashMap<String, String>,
}

impl RecommendSpecialistExtras {
    fn is_empty(&self) -> bool {
        !self.enable_symptom_duration && self.specialist_mapping.is_empty()
    }
}

/// Request for `recommend_specialist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendSpecialistRequest {
    pub sex: Sex,
    pub age: Age,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<String>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "RecommendSpecialistExtras::is_empty")]
    pub extras: RecommendSpecialistExtras,
}

impl RecommendSpecialistRequest {
    pub fn new(sex: Sex, age: Age) -> Self {
        Self {
            sex,
            age,
            evaluated_at: None,
            evidence: Vec::new(),
            extras: RecommendSpecialistExtras::default(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = Evidence>) -> Self {
        self.evidence.extend(evidence);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_evidence(&self.evidence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Response from `recommend_specialist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendSpecialistResponse {
    pub recommended_specialist: Specialist,
    pub recommended_channel: RecommendedChannel,
}

// ─────────────────────────────────────────────────────────────────────────────
// Knowledge base
// ─────────────────────────────────────────────────────────────────────────────

/// A concept of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ConceptType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
}

/// Filters for listing concepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptsQuery {
    /// Only these IDs.
    pub ids: Vec<String>,
    /// Only these kinds.
    pub types: Vec<ConceptType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionExtras {
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub icd10_code: Option<String>,
}

/// A condition from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub sex_filter: Option<SexFilter>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub prevalence: Option<Prevalence>,
    #[serde(default)]
    pub acuteness: Option<Acuteness>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub triage_level: Option<TriageLevel>,
    #[serde(default)]
    pub extras: ConditionExtras,
}

/// A symptom from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub seriousness: Option<Seriousness>,
    #[serde(default)]
    pub children: Vec<SymptomChild>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_source: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_relation: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub question_third_person: Option<String>,
    #[serde(default)]
    pub sex_filter: Option<SexFilter>,
    #[serde(default)]
    pub extras: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomChild {
    pub id: String,
    #[serde(default)]
    pub parent_relation: Option<String>,
}

/// A risk factor from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub question_third_person: Option<String>,
    #[serde(default)]
    pub sex_filter: Option<SexFilter>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_source: Option<String>,
    #[serde(default)]
    pub extras: serde_json::Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Lab tests
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestResult {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A lab test from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub results: Vec<LabTestResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestRef {
    pub id: String,
}

/// A panel of lab tests recommended together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestPanel {
    pub panel_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub lab_tests: Vec<LabTestRef>,
}

/// Response from `lab_tests/recommend`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabTestsRecommendation {
    #[serde(default)]
    pub recommended: Vec<LabTestPanel>,
    #[serde(default)]
    pub obligatory: Vec<LabTestPanel>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Search and lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Request for `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub phrase: String,
    pub sex: Sex,
    pub age: Age,
    /// Must be positive.
    pub max_results: u32,
    /// Empty means the upstream default (symptoms).
    pub types: Vec<SearchType>,
}

impl SearchRequest {
    pub fn new(phrase: impl Into<String>, sex: Sex, age: Age) -> Self {
        Self {
            phrase: phrase.into(),
            sex,
            age,
            max_results: 8,
            types: Vec::new(),
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = SearchType>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.phrase.trim().is_empty() {
            return Err(Error::InvalidArgument("search phrase is empty".to_string()));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidArgument(
                "max_results must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// A search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// Response from `lookup`: the single best match for a phrase.
pub type LookupResult = SearchResult;

// ─────────────────────────────────────────────────────────────────────────────
// Parse
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

/// Request for `parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    pub age: Age,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(default = "default_true")]
    pub correct_spelling: bool,
    #[serde(default)]
    pub include_tokens: bool,
    /// IDs of observations already known, used to disambiguate mentions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
}

impl ParseRequest {
    pub fn new(text: impl Into<String>, age: Age) -> Self {
        Self {
            text: text.into(),
            age,
            sex: None,
            correct_spelling: true,
            include_tokens: false,
            context: Vec::new(),
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidArgument("parse text is empty".to_string()));
        }
        Ok(())
    }
}

/// An observation found in free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    /// Matched fragment of the input.
    #[serde(default)]
    pub orth: String,
    pub choice_id: EvidenceChoiceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ConceptType,
}

/// Response from `parse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub obvious: bool,
}

impl ParseResponse {
    /// Turn the mentions into evidence, keeping their order.
    pub fn to_evidence(&self) -> Result<Vec<Evidence>> {
        if self.mentions.is_empty() {
            return Err(Error::InvalidArgument(
                "parse response has no mentions".to_string(),
            ));
        }
        Ok(self
            .mentions
            .iter()
            .map(|m| Evidence::new(m.id.clone(), m.choice_id))
            .collect())
    }
}
