//! AssemblyAI speech-to-text client
//!
//! Three blocking calls: upload the audio, create a transcript job for the
//! uploaded file, then poll the job until it is `completed` or `error`.
//! There is no overall deadline; a stuck job keeps the caller waiting.

use crate::analysis::traits::{Transcriber, Transcript};
use crate::config::Settings;
use crate::error::{LyricprepError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";

/// Delay between status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Transcriber backed by the AssemblyAI REST API
pub struct AssemblyAiTranscriber {
    client: Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    show_progress: bool,
}

impl AssemblyAiTranscriber {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lyricprep/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            show_progress: false,
        })
    }

    /// Build a client from runtime settings
    ///
    /// A missing API key is only reported when a transcription is attempted,
    /// so runs that reuse an existing lyrics file never need one.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.api_key.clone().unwrap_or_default())?
            .with_base_url(settings.api_url.as_str())
            .with_poll_interval(settings.poll_interval)
            .with_progress(settings.show_progress))
    }

    /// Point the client at another server (self-hosted proxy, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Show a spinner while waiting for the job
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn upload(&self, audio_path: &Path) -> Result<String> {
        let bytes = std::fs::read(audio_path)?;
        debug!("Uploading {} ({} bytes)", audio_path.display(), bytes.len());

        let response = self
            .client
            .post(self.url("/v2/upload"))
            .header("authorization", &self.api_key)
            .header("content-type", "application/octet-stream")
            .body(bytes)
            .send()?;

        let upload: UploadResponse = check_status(response)?.json()?;
        Ok(upload.upload_url)
    }

    fn create_job(&self, audio_url: &str) -> Result<TranscriptResponse> {
        let response = self
            .client
            .post(self.url("/v2/transcript"))
            .header("authorization", &self.api_key)
            .json(&TranscriptRequest { audio_url })
            .send()?;

        Ok(check_status(response)?.json()?)
    }

    fn fetch_job(&self, id: &str) -> Result<TranscriptResponse> {
        let response = self
            .client
            .get(self.url(&format!("/v2/transcript/{}", id)))
            .header("authorization", &self.api_key)
            .send()?;

        Ok(check_status(response)?.json()?)
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    }

    /// Poll a job until the service reports `completed` or `error`
    fn wait_for(&self, mut job: TranscriptResponse, spinner: Option<&ProgressBar>) -> Result<Transcript> {
        loop {
            if let Some(pb) = spinner {
                pb.set_message(format!("Transcribing ({})", job.status));
            }

            match job.status.as_str() {
                "completed" => return Ok(Transcript::completed(job.text.unwrap_or_default())),
                "error" => {
                    let message = job
                        .error
                        .unwrap_or_else(|| "service reported an error without details".to_string());
                    return Ok(Transcript::failed(message));
                }
                other => {
                    debug!("Job {} is {}, polling again", job.id, other);
                    std::thread::sleep(self.poll_interval);
                    job = self.fetch_job(&job.id)?;
                }
            }
        }
    }
}

impl Transcriber for AssemblyAiTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<Transcript> {
        if self.api_key.trim().is_empty() {
            return Err(LyricprepError::missing_api_key());
        }

        let audio_url = self.upload(audio_path)?;
        let job = self.create_job(&audio_url)?;
        info!("Transcription job {} submitted", job.id);

        let spinner = self.spinner();
        let result = self.wait_for(job, spinner.as_ref());
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result
    }

    fn name(&self) -> &'static str {
        "assemblyai"
    }
}

/// Turn a non-2xx response into a transcription failure carrying the
/// service's own error message when it sent one
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or(body);

    Err(LyricprepError::TranscriptionFailed {
        reason: format!("HTTP {}: {}", status, message.trim()),
    })
}
