use super::options::RESULT_SIZE_PARAM;
use super::transport::{HttpTransport, RefererSource, StaticReferer, Transport};
use super::{ApiResponse, Operation, QueryOptions, SearchError};
use std::time::Duration;

/// Default AJAX Search endpoint; the operation is appended as a path segment
pub const DEFAULT_BASE_URL: &str = "http://ajax.googleapis.com/ajax/services/search";

/// API version sent as `v`
pub const DEFAULT_API_VERSION: &str = "1.0";

/// The remote API caps a single page at 8 results
pub const MAX_RESULT_SIZE: u32 = 8;

/// Per-client settings. Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_version: String,
    /// Injected as `rsz` when a call does not set one
    pub result_size: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            result_size: MAX_RESULT_SIZE,
            timeout: Duration::from_secs(10),
            user_agent: concat!("gsearch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Client for the Google AJAX Search API
///
/// One blocking GET per call, no caching, no retries. Errors are returned
/// to the caller, who decides whether to try again.
///
/// ```no_run
/// use gsearch::search::{ClientConfig, QueryOptions, SearchClient};
///
/// let client = SearchClient::new(ClientConfig::default())?;
/// let data = client.images("cougar", &QueryOptions::new().with("safe", "active"))?;
/// println!("{}", data);
/// # Ok::<(), gsearch::search::SearchError>(())
/// ```
pub struct SearchClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
    referer: Box<dyn RefererSource>,
}

impl SearchClient {
    /// Create a client backed by a `reqwest` blocking transport and no referer
    pub fn new(config: ClientConfig) -> Result<Self, SearchError> {
        let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        if config.result_size > MAX_RESULT_SIZE {
            tracing::warn!(
                result_size = config.result_size,
                max = MAX_RESULT_SIZE,
                "result size exceeds the remote API cap"
            );
        }

        Self {
            config,
            transport: Box::new(transport),
            referer: Box::new(StaticReferer::none()),
        }
    }

    /// Set where the `Referer` header comes from
    pub fn with_referer(mut self, referer: impl RefererSource + 'static) -> Self {
        self.referer = Box::new(referer);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run a search by operation name
    ///
    /// Names outside [`Operation::ALL`] fail with
    /// [`SearchError::InvalidOperation`] without touching the network.
    pub fn dispatch(
        &self,
        operation: &str,
        query: &str,
        options: &QueryOptions,
    ) -> Result<serde_json::Value, SearchError> {
        let operation: Operation = operation.parse()?;
        self.execute_search(operation, query, options)
    }

    /// Run a search and return the `responseData` payload untouched
    pub fn execute_search(
        &self,
        operation: Operation,
        query: &str,
        options: &QueryOptions,
    ) -> Result<serde_json::Value, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let url = self.build_url(operation, query, options);
        let referer = self.referer.current_url();

        tracing::debug!(
            operation = %operation,
            query = %query,
            url = %url,
            referer = ?referer,
            "performing google search"
        );

        let body = self.transport.get(&url, referer.as_deref())?;
        let response: ApiResponse =
            serde_json::from_str(&body).map_err(SearchError::MalformedResponse)?;

        if response.response_status != super::SUCCESS_STATUS {
            tracing::warn!(
                operation = %operation,
                status = response.response_status,
                details = ?response.response_details,
                "google api error"
            );
        }

        let data = response.into_result()?;
        tracing::debug!(operation = %operation, "google search completed");
        Ok(data)
    }

    /// Build the request URL for a search
    ///
    /// Parameter order: `v`, `q`, injected `rsz` (only when `options` has
    /// none), then `options` in insertion order. `q` and `v` in `options`
    /// are ignored. Only values are escaped; names go out as given.
    pub fn build_url(&self, operation: Operation, query: &str, options: &QueryOptions) -> String {
        let mut url = format!(
            "{}/{}?v={}&q={}",
            self.config.base_url.trim_end_matches('/'),
            operation,
            urlencoding::encode(&self.config.api_version),
            urlencoding::encode(query)
        );

        if !options.contains(RESULT_SIZE_PARAM) {
            url.push_str(&format!("&{}={}", RESULT_SIZE_PARAM, self.config.result_size));
        }

        for (name, value) in options.iter() {
            if name == "q" || name == "v" {
                tracing::warn!(param = %name, "ignoring reserved search option");
                continue;
            }
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    pub fn web(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Web, query, options)
    }

    pub fn local(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Local, query, options)
    }

    pub fn video(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Video, query, options)
    }

    pub fn blogs(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Blogs, query, options)
    }

    pub fn news(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::News, query, options)
    }

    pub fn books(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Books, query, options)
    }

    pub fn images(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Images, query, options)
    }

    pub fn patent(&self, query: &str, options: &QueryOptions) -> Result<serde_json::Value, SearchError> {
        self.execute_search(Operation::Patent, query, options)
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
