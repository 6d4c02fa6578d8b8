//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{
    ConceptsApi, ConditionsApi, InterviewApi, LabTestsApi, NlpApi, RiskFactorsApi, SearchApi,
    SymptomsApi,
};
use crate::config::ClientConfig;
use crate::error::{Error, ErrorResponse, Result};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.infermedica.com/v3/";

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const APP_ID: HeaderName = HeaderName::from_static("app-id");
const APP_KEY: HeaderName = HeaderName::from_static("app-key");
const DEV_MODE: HeaderName = HeaderName::from_static("dev-mode");
const MODEL: HeaderName = HeaderName::from_static("model");
const INTERVIEW_ID: HeaderName = HeaderName::from_static("interview-id");

/// Infermedica API client.
///
/// Holds the credentials and interview context that are sent as headers with
/// every call, plus one shared HTTP transport. Cloning is cheap and clones
/// share the transport.
///
/// # Example
///
/// ```no_run
/// use infermedica_client::{Age, InfermedicaClient, Sex, TriageRequest};
///
/// # async fn example() -> infermedica_client::Result<()> {
/// let client = InfermedicaClient::builder()
///     .app_id("my-app-id")
///     .app_key("my-app-key")
///     .build()?;
///
/// let triage = client
///     .interview()
///     .triage(&TriageRequest::new(Sex::Female, Age::years(30)))
///     .await?;
/// println!("triage level: {}", triage.triage_level);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InfermedicaClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Values sent as headers.
    context: Context,
    /// Request timeout.
    timeout: Duration,
}

/// Per-client header values.
#[derive(Clone)]
struct Context {
    app_id: String,
    app_key: String,
    model: Option<String>,
    interview_id: Option<String>,
    dev_mode: bool,
}

impl std::fmt::Debug for InfermedicaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let context = &self.inner.context;
        f.debug_struct("InfermedicaClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("app_id", &context.app_id)
            .field("model", &context.model)
            .field("interview_id", &context.interview_id)
            .field("dev_mode", &context.dev_mode)
            .finish_non_exhaustive()
    }
}

/// Per-call adjustments to a prepared request.
///
/// Overrides only apply to the request being built; the client itself is
/// never modified, so a client can be shared freely across tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    timeout: Option<Duration>,
    without_model: bool,
}

impl RequestOptions {
    /// Options that keep every client default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `timeout` instead of the client default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Do not send the `Model` header.
    pub fn without_model(mut self) -> Self {
        self.without_model = true;
        self
    }
}

impl InfermedicaClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the application ID sent as `App-Id`.
    pub fn app_id(&self) -> &str {
        &self.inner.context.app_id
    }

    /// Model sent with every call except `parse`.
    pub fn model(&self) -> Option<&str> {
        self.inner.context.model.as_deref()
    }

    /// Interview ID sent as `Interview-Id`, if any.
    pub fn interview_id(&self) -> Option<&str> {
        self.inner.context.interview_id.as_deref()
    }

    /// Check if calls are marked as development traffic.
    pub fn dev_mode(&self) -> bool {
        self.inner.context.dev_mode
    }

    /// Get the default request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// A client identical to this one with dev mode switched on or off.
    pub fn with_dev_mode(&self, enabled: bool) -> Self {
        self.derive(|context| context.dev_mode = enabled)
    }

    /// A client identical to this one using another model.
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        let model = non_empty(model.into());
        self.derive(|context| context.model = model)
    }

    /// A client identical to this one correlating calls under `interview_id`.
    pub fn with_interview_id(&self, interview_id: impl Into<String>) -> Self {
        let interview_id = non_empty(interview_id.into());
        self.derive(|context| context.interview_id = interview_id)
    }

    fn derive(&self, update: impl FnOnce(&mut Context)) -> Self {
        let mut context = self.inner.context.clone();
        update(&mut context);
        Self {
            inner: Arc::new(ClientInner {
                http: self.inner.http.clone(),
                base_url: self.inner.base_url.clone(),
                context,
                timeout: self.inner.timeout,
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the concepts API.
    pub fn concepts(&self) -> ConceptsApi {
        ConceptsApi::new(self.clone())
    }

    /// Access the conditions API.
    pub fn conditions(&self) -> ConditionsApi {
        ConditionsApi::new(self.clone())
    }

    /// Access the interview API (diagnosis, triage, suggest, explain, ...).
    pub fn interview(&self) -> InterviewApi {
        InterviewApi::new(self.clone())
    }

    /// Access the lab tests API.
    pub fn lab_tests(&self) -> LabTestsApi {
        LabTestsApi::new(self.clone())
    }

    /// Access the natural language API.
    pub fn nlp(&self) -> NlpApi {
        NlpApi::new(self.clone())
    }

    /// Access the risk factors API.
    pub fn risk_factors(&self) -> RiskFactorsApi {
        RiskFactorsApi::new(self.clone())
    }

    /// Access the search and lookup API.
    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.clone())
    }

    /// Access the symptoms API.
    pub fn symptoms(&self) -> SymptomsApi {
        SymptomsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path. The path may carry a query string.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Headers carried by every request of this client.
    fn headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let context = &self.inner.context;

        let mut headers = HeaderMap::new();
        headers.insert(APP_ID, header_value("App-Id", &context.app_id)?);
        headers.insert(APP_KEY, header_value("App-Key", &context.app_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if context.dev_mode {
            headers.insert(DEV_MODE, HeaderValue::from_static("true"));
        }
        if let Some(model) = &context.model {
            if !options.without_model {
                headers.insert(MODEL, header_value("Model", model)?);
            }
        }
        if let Some(interview_id) = &context.interview_id {
            headers.insert(INTERVIEW_ID, header_value("Interview-Id", interview_id)?);
        }

        Ok(headers)
    }

    /// Prepare a request without sending it.
    ///
    /// Only GET and POST are supported. GET paths must already carry their
    /// encoded query and never get a body; POST bodies are serialized to JSON.
    pub fn prepare_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let builder = match method {
            Method::GET => self.inner.http.get(url),
            Method::POST => {
                let builder = self.inner.http.post(url);
                match body {
                    Some(body) => builder.body(serde_json::to_vec(body)?),
                    None => builder,
                }
            }
            other => return Err(Error::MethodNotAllowed(other.to_string())),
        };

        let request = builder
            .headers(self.headers(options)?)
            .timeout(options.timeout.unwrap_or(self.inner.timeout))
            .build()?;
        Ok(request)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let request = self.prepare_request::<()>(Method::GET, path, None, &options)?;
        self.execute(request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.prepare_request(Method::POST, path, Some(body), &options)?;
        self.execute(request).await
    }

    /// Send a prepared request, check the status and decode the body.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T> {
        tracing::debug!(
            method = %request.method(),
            path = %request.url().path(),
            "sending request"
        );

        let response = self.inner.http.execute(request).await?;
        let response = check_response(response).await?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Accept a 200 response; turn anything else into [`Error::Api`].
///
/// The body of a failed response is read for the `{"message": ...}` envelope.
/// A body that does not parse still yields an error carrying the status line.
pub(crate) async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    tracing::debug!(status = %status, url = %response.url().path(), "received response");

    if status == StatusCode::OK {
        return Ok(response);
    }

    let message = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .map(|envelope| envelope.message),
        Err(_) => None,
    };
    tracing::warn!(status = %status, message = ?message, "request rejected");

    Err(Error::Api {
        status: status.as_u16(),
        status_line: status.to_string(),
        message,
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("Invalid {} header value", name)))
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Builder for creating an InfermedicaClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    app_id: Option<String>,
    app_key: Option<String>,
    model: Option<String>,
    interview_id: Option<String>,
    dev_mode: bool,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            app_id: None,
            app_key: None,
            model: None,
            interview_id: None,
            dev_mode: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new()
            .base_url(config.base_url.clone())
            .app_id(config.app_id.clone())
            .app_key(config.app_key.clone())
            .dev_mode(config.dev_mode)
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(model) = &config.model {
            builder = builder.model(model.clone());
        }
        if let Some(interview_id) = &config.interview_id {
            builder = builder.interview_id(interview_id.clone());
        }
        builder
    }

    /// Override the API root (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the application ID (required).
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set the application key (required).
    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set the knowledge model, e.g. `infermedica-es`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = non_empty(model.into());
        self
    }

    /// Set the interview session ID.
    pub fn interview_id(mut self, interview_id: impl Into<String>) -> Self {
        self.interview_id = non_empty(interview_id.into());
        self
    }

    /// Mark calls as development traffic.
    pub fn dev_mode(mut self, enabled: bool) -> Self {
        self.dev_mode = enabled;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<InfermedicaClient> {
        let app_id = self
            .app_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Config("app_id is required".to_string()))?;
        let app_key = self
            .app_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("app_key is required".to_string()))?;

        // Parse and normalize base URL
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("infermedica-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(InfermedicaClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                context: Context {
                    app_id,
                    app_key,
                    model: self.model,
                    interview_id: self.interview_id,
                    dev_mode: self.dev_mode,
                },
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
