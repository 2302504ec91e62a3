// API client module: contains a small blocking HTTP client that talks to
// the FOSSA-style scanning service. It is intentionally small and
// synchronous; each user action maps to exactly one request.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// The scanning service lives at a fixed address; only tests point the
/// client elsewhere.
pub const FOSSA_API_URL: &str = "https://api.fossa.com";

/// Simple API client that holds a reqwest blocking client, the base URL
/// of the scanning service and an optional API key for bearer auth.
///
/// The key doubles as the session state shared between pages: Project
/// Setup resolves it once and stores it here, and the other pages reuse
/// it. When no key is set, requests go out without an Authorization
/// header and the server is left to reject them.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    key: Option<String>,
}

/// Options a scan can be submitted with. Wire names are the service's
/// kebab-case identifiers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOption {
    LicenseCheck,
    SnippetAnalysis,
}

impl ScanOption {
    pub const ALL: [ScanOption; 2] = [ScanOption::LicenseCheck, ScanOption::SnippetAnalysis];

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            ScanOption::LicenseCheck => "License check",
            ScanOption::SnippetAnalysis => "Snippet analysis",
        }
    }
}

/// Payload for submitting a project scan. Fields mirror the backend
/// expectations for `POST /api/cli/analyze`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub name: String,
    pub path: String,
    pub scan_options: Vec<ScanOption>,
}

/// Latest-scan response. Both fields are opaque JSON the service shapes
/// however it likes; we render them verbatim. A 200 response missing
/// either field fails deserialization and surfaces as a generic failure.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub license_scan: serde_json::Value,
    pub snippet_analysis: serde_json::Value,
}

/// Aggregate stats backing the dashboard page.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub project_stats: serde_json::Value,
    pub license_violations: serde_json::Value,
}

impl ApiClient {
    /// Create an ApiClient pointed at the production service.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FOSSA_API_URL)
    }

    /// Create an ApiClient with an explicit base URL. Used by tests to
    /// target a local server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            key: None,
        })
    }

    /// Store the resolved API key for subsequent authenticated requests.
    pub fn set_key(&mut self, key: &str) {
        self.key = Some(key.to_string());
    }

    /// Returns whether a key is present in the client.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Attach the bearer header when a key is set.
    fn authed(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.key {
            Some(k) => req.bearer_auth(k),
            None => req,
        }
    }

    /// Submit a project for scanning via `POST /api/cli/analyze`.
    /// A 200 status is the only success; everything else (including
    /// error bodies we never parse) becomes a single error.
    pub fn analyze(&self, req: &ScanRequest) -> Result<()> {
        let url = format!("{}/api/cli/analyze", &self.base_url);
        log::debug!("POST {} name={}", url, req.name);
        let res = self
            .authed(self.client.post(&url))
            .json(req)
            .send()
            .context("Failed to send analyze request")?;
        if res.status() != StatusCode::OK {
            anyhow::bail!("Analyze failed: {}", res.status());
        }
        Ok(())
    }

    /// Fetch the latest scan for a project via
    /// `GET /api/projects/{id}/latest-scan`.
    pub fn latest_scan(&self, project_id: &str) -> Result<ScanResult> {
        let url = format!("{}/api/projects/{}/latest-scan", &self.base_url, project_id);
        log::debug!("GET {}", url);
        let res = self
            .authed(self.client.get(&url))
            .send()
            .context("Failed to send latest-scan request")?;
        if res.status() != StatusCode::OK {
            anyhow::bail!("Latest scan fetch failed: {}", res.status());
        }
        let result: ScanResult = res.json().context("Parsing latest-scan response json")?;
        Ok(result)
    }

    /// Fetch aggregate project stats via `GET /api/projects`.
    pub fn projects(&self) -> Result<DashboardStats> {
        let url = format!("{}/api/projects", &self.base_url);
        log::debug!("GET {}", url);
        let res = self
            .authed(self.client.get(&url))
            .send()
            .context("Failed to send project stats request")?;
        if res.status() != StatusCode::OK {
            anyhow::bail!("Project stats fetch failed: {}", res.status());
        }
        let stats: DashboardStats = res.json().context("Parsing project stats json")?;
        Ok(stats)
    }
}
