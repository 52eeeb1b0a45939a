// HTTP layer: a small blocking client behind the `Transport` trait so the
// backends can be driven by a recording mock in tests. One call per
// invocation, no retries, no timeout.

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

/// Fixed pastebin.com submission endpoint.
pub const PASTEBIN_POST_URL: &str = "https://pastebin.com/api/api_post.php";

/// paste.rs base URL. Pastes are created at `{base}/` and live at `{base}/{id}`.
pub const PASTERS_BASE_URL: &str = "https://paste.rs";

/// Status code and raw body of a remote response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The three request shapes the backends need.
pub trait Transport {
    /// POST an `application/x-www-form-urlencoded` payload.
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply>;

    /// POST raw bytes as the request body.
    fn post_bytes(&self, url: &str, body: Vec<u8>) -> Result<Reply>;

    fn delete(&self, url: &str) -> Result<Reply>;
}

/// Where the two services live. Overridable from the command line or
/// environment so a self-hosted paste.rs (or a local test server) can be
/// targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub pastebin: String,
    pub pasters: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            pastebin: PASTEBIN_POST_URL.into(),
            pasters: PASTERS_BASE_URL.into(),
        }
    }
}

/// reqwest-backed transport. Shows a spinner on stderr while a request is in
/// flight (hidden when stderr is not a terminal).
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(HttpTransport { client })
    }

    fn send(&self, method: &str, url: &str, req: RequestBuilder) -> Result<Reply> {
        tracing::debug!(method, url, "sending request");
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Waiting for server...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let res = req.send();
        spinner.finish_and_clear();
        let res = res?;

        let status = res.status().as_u16();
        let body = res.text()?;
        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(Reply { status, body })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Reply> {
        self.send("POST", url, self.client.post(url).form(form))
    }

    fn post_bytes(&self, url: &str, body: Vec<u8>) -> Result<Reply> {
        self.send("POST", url, self.client.post(url).body(body))
    }

    fn delete(&self, url: &str) -> Result<Reply> {
        self.send("DELETE", url, self.client.delete(url))
    }
}
