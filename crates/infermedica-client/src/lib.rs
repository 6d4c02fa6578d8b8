//! Typed HTTP client for the Infermedica v3 diagnosis API.
//!
//! The client attaches credentials and interview context to every request,
//! serializes typed requests to JSON and decodes typed responses. All
//! diagnostic reasoning happens upstream; nothing is cached or retried here.
//!
//! # Example
//!
//! ```no_run
//! use infermedica_client::{
//!     Age, DiagnosisRequest, Evidence, InfermedicaClient, ParseRequest, Result, Sex,
//! };
//!
//! # async fn example() -> Result<()> {
//! let client = InfermedicaClient::builder()
//!     .app_id("my-app-id")
//!     .app_key("my-app-key")
//!     .interview_id("d083e76f-3c29-44aa-8893-587f3691c0c5")
//!     .build()?;
//!
//! // Turn the patient's complaint into evidence
//! let parsed = client
//!     .nlp()
//!     .parse(&ParseRequest::new("I have a headache and a fever", Age::years(30)))
//!     .await?;
//!
//! // Ask for the next interview question
//! let request = DiagnosisRequest::new(Sex::Female, Age::years(30))
//!     .with_evidence(parsed.to_evidence()?)
//!     .with_evidence([Evidence::absent("s_98")]);
//! let diagnosis = client.interview().diagnosis(&request).await?;
//!
//! if let Some(question) = diagnosis.question {
//!     println!("{}", question.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Interview**: diagnosis, triage, suggest, explain, rationale, specialist recommendation
//! - **Knowledge base**: concepts, conditions, symptoms, risk factors, lab tests
//! - **Search**: phrase search and single best-match lookup
//! - **NLP**: free-text parsing into evidence

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod tokens;
pub mod types;

pub use client::{ClientBuilder, InfermedicaClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use tokens::*;
pub use types::*;
