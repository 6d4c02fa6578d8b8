//! API endpoint implementations.

mod concepts;
mod conditions;
mod interview;
mod nlp;
mod risk_factors;
mod search;
mod symptoms;

pub use concepts::ConceptsApi;
pub use conditions::ConditionsApi;
pub use interview::InterviewApi;
pub use lab_tests::LabTestsApi;
pub use nlp::NlpApi;
pub use risk_factors::RiskFactorsApi;
pub use search::SearchApi;
pub use symptoms::SymptomsApi;

use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::types::Age;

/// Query string builder for GET endpoints.
pub(crate) struct Query(form_urlencoded::Serializer<'static, String>);

impl Query {
    pub(crate) fn new() -> Self {
        Self(form_urlencoded::Serializer::new(String::new()))
    }

    pub(crate) fn pair(mut self, name: &str, value: &str) -> Self {
        self.0.append_pair(name, value);
        self
    }

    /// Append `age.value` and `age.unit`.
    pub(crate) fn age(self, age: &Age) -> Self {
        self.pair("age.value", &age.value.to_string())
            .pair("age.unit", age.unit.as_str())
    }

    /// Append a feature flag; unset flags are left out.
    pub(crate) fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.pair(name, "true")
        } else {
            self
        }
    }

    /// Append a comma separated list; empty lists are left out.
    pub(crate) fn list<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        if joined.is_empty() {
            self
        } else {
            self.pair(name, &joined)
        }
    }

    /// Attach the query to `path`.
    pub(crate) fn to_path(mut self, path: &str) -> String {
        let query = self.0.finish();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

/// `collection/<id>` with the ID percent-encoded as one path segment.
pub(crate) fn item_path(collection: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{} id is empty", collection)));
    }
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    Ok(format!("{}/{}", collection, segment.replace('+', "%20")))
}
