//! Closed-set string values used across the API.
//!
//! Every enumerated field of the API is a small fixed set of lowercase
//! tokens. Each set is registered once through [`closed_set!`], which
//! generates the enum, its token table and the parsing/serde glue. Parsing is
//! case-insensitive and always yields the canonical token; anything outside
//! the table is rejected with [`Error::UnexpectedValue`] before it can reach
//! the wire.

use crate::error::{Error, Result};

/// A fixed set of string tokens mapped onto enum variants.
pub trait ClosedSet: Sized + Copy + 'static {
    /// Type name used in validation errors.
    const NAME: &'static str;

    /// Canonical token for every variant.
    const TOKENS: &'static [(&'static str, Self)];

    /// Canonical token of this value.
    fn token(&self) -> &'static str;
}

/// Look up `value` (ignoring ASCII case) in the token table of `T`.
pub fn parse_token<T: ClosedSet>(value: &str) -> Result<T> {
    T::TOKENS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(value))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| Error::UnexpectedValue {
            field: T::NAME,
            value: value.to_string(),
        })
}

/// Validate `value` against `T` and return its canonical token.
pub fn canonical_token<T: ClosedSet>(value: &str) -> Result<&'static str> {
    parse_token::<T>(value).map(|variant| variant.token())
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Canonical wire token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }
        }

        impl $crate::tokens::ClosedSet for $name {
            const NAME: &'static str = $field;
            const TOKENS: &'static [(&'static str, Self)] = &[ $( ($token, Self::$variant) ),+ ];

            fn token(&self) -> &'static str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $crate::tokens::parse_token(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::Error;

            fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
                $crate::tokens::parse_token(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $crate::tokens::parse_token(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Patient
// ─────────────────────────────────────────────────────────────────────────────

closed_set! {
    /// Biological sex of the patient.
    pub enum Sex as "Sex" {
        Male => "male",
        Female => "female",
    }
}

closed_set! {
    /// Which sexes a knowledge-base entry applies to.
    pub enum SexFilter as "SexFilter" {
        Both => "both",
        Male => "male",
        Female => "female",
    }
}

closed_set! {
    /// Unit of [`Age`](crate::types::Age).
    #[derive(Default)]
    pub enum AgeUnit as "AgeUnit" {
        #[default]
        Year => "year",
        Month => "month",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conditions
// ─────────────────────────────────────────────────────────────────────────────

closed_set! {
    /// How common a condition is.
    pub enum Prevalence as "Prevalence" {
        VeryRare => "very_rare",
        Rare => "rare",
        Moderate => "moderate",
        Common => "common",
    }
}

closed_set! {
    /// Time course of a condition.
    pub enum Acuteness as "Acuteness" {
        Chronic => "chronic",
        ChronicWithExacerbations => "chronic_with_exacerbations",
        AcutePotentiallyChronic => "acute_potentially_chronic",
        Acute => "acute",
    }
}

closed_set! {
    pub enum Severity as "Severity" {
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
}

closed_set! {
    /// Seriousness of a symptom or of a reported observation in triage.
    pub enum Seriousness as "Seriousness" {
        Normal => "normal",
        Serious => "serious",
        Emergency => "emergency",
        EmergencyAmbulance => "emergency_ambulance",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interview
// ─────────────────────────────────────────────────────────────────────────────

closed_set! {
    /// Shape of the next question returned by `diagnosis`.
    pub enum QuestionType as "QuestionType" {
        /// One yes/no/don't know question.
        Single => "single",
        /// Pick exactly one item of a group.
        GroupSingle => "group_single",
        /// Answer every item of a group.
        GroupMultiple => "group_multiple",
        /// Only returned when symptom duration is enabled.
        Duration => "duration",
    }
}

closed_set! {
    /// Answer attached to a piece of evidence.
    pub enum EvidenceChoiceId as "EvidenceChoiceId" {
        Present => "present",
        Absent => "absent",
        Unknown => "unknown",
    }
}

closed_set! {
    /// Where a piece of evidence came from in the interview.
    pub enum EvidenceSource as "EvidenceSource" {
        Initial => "initial",
        Suggest => "suggest",
        Predefined => "predefined",
        RedFlags => "red_flags",
    }
}

closed_set! {
    pub enum DurationUnit as "DurationUnit" {
        Week => "week",
        Day => "day",
        Hour => "hour",
        Minute => "minute",
    }
}

closed_set! {
    /// Question-selection strategy for `diagnosis`.
    pub enum InterviewMode as "InterviewMode" {
        /// Balance between interview length and accuracy of the ranking.
        Default => "default",
        /// Shorter interviews optimized for the triage level.
        Triage => "triage",
    }
}

closed_set! {
    /// Kind of suggestions requested from `suggest`.
    pub enum SuggestMethod as "SuggestMethod" {
        Symptoms => "symptoms",
        /// Deprecated upstream since API 3.5.
        RiskFactors => "risk_factors",
        DemographicRiskFactors => "demographic_risk_factors",
        EvidenceBasedRiskFactors => "evidence_based_risk_factors",
        RedFlags => "red_flags",
    }
}

closed_set! {
    /// Reason code explaining why a question was asked.
    pub enum RationaleType as "RationaleType" {
        R0 => "r0",
        R1 => "r1",
        R2 => "r2",
        R3 => "r3",
        R4 => "r4",
        R5 => "r5",
        R6 => "r6",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Triage and referral
// ─────────────────────────────────────────────────────────────────────────────

closed_set! {
    /// Urgency classification, most urgent first.
    pub enum TriageLevel as "TriageLevel" {
        EmergencyAmbulance => "emergency_ambulance",
        Emergency => "emergency",
        Consultation24 => "consultation_24",
        Consultation => "consultation",
        SelfCare => "self_care",
    }
}

closed_set! {
    /// What drove the triage level.
    pub enum RootCause as "RootCause" {
        EmergencyAmbulanceEvidence => "emergency_ambulance_evidence",
        EmergencyAmbulanceConditions => "emergency_ambulance_conditions",
        EmergencyEvidence => "emergency_evidence",
        EmergencyConditions => "emergency_conditions",
        Consultation24Evidence => "consultation_24_evidence",
        Consultation24Conditions => "consultation_24_conditions",
        ConsultationEvidence => "consultation_evidence",
        ConsultationConditions => "consultation_conditions",
        SelfCareSufficient => "self_care_sufficient",
    }
}

closed_set! {
    /// How the patient should reach the recommended specialist.
    pub enum RecommendedChannel as "RecommendedChannel" {
        PersonalVisit => "personal_visit",
        VideoTeleconsultation => "video_teleconsultation",
        AudioTeleconsultation => "audio_teleconsultation",
        TextTeleconsultation => "text_teleconsultation",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Knowledge base
// ─────────────────────────────────────────────────────────────────────────────

closed_set! {
    /// Observation kinds accepted by `search`.
    pub enum SearchType as "SearchType" {
        Symptom => "symptom",
        RiskFactor => "risk_factor",
        LabTest => "lab_test",
        Condition => "condition",
    }
}

closed_set! {
    /// Kind of a knowledge-base concept.
    pub enum ConceptType as "ConceptType" {
        Condition => "condition",
        Symptom => "symptom",
        RiskFactor => "risk_factor",
        LabTest => "lab_test",
    }
}
