use super::SearchError;
use reqwest::header::REFERER;
use std::time::Duration;

/// Blocking HTTP GET used by the search client
///
/// Returns the raw response body; interpreting it is the client's job.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, referer: Option<&str>) -> Result<String, SearchError>;
}

/// Source of the `Referer` header value
///
/// The AJAX Search terms asked callers to identify the site issuing the
/// search, so the host application supplies its current URL here.
pub trait RefererSource: Send + Sync {
    fn current_url(&self) -> Option<String>;
}

impl<F> RefererSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_url(&self) -> Option<String> {
        self()
    }
}

/// Fixed referer, typically read from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticReferer(pub Option<String>);

impl StaticReferer {
    pub fn new(url: impl Into<String>) -> Self {
        Self(Some(url.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl RefererSource for StaticReferer {
    fn current_url(&self) -> Option<String> {
        self.0.clone()
    }
}

/// `reqwest` blocking transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, SearchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, referer: Option<&str>) -> Result<String, SearchError> {
        let mut request = self.client.get(url);
        if let Some(referer) = referer {
            request = request.header(REFERER, referer);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        // The envelope carries the real status; the HTTP one is only logged.
        tracing::debug!(status = %status, bytes = body.len(), "received search response");

        Ok(body)
    }
}
