use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::LuxConfig;
use crate::errors::{LuxError, LuxResult};
use crate::progress::{ProgressFn, TrackedPayload, UploadCounter};
use crate::types::*;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Seam between the tool controllers and the network layer. One network call
/// per invocation; every failure cause collapses into a `LuxError` the caller
/// treats uniformly.
#[async_trait]
pub trait ToolApi: Send + Sync {
    async fn summarize(&self, request: &SummarizeRequest) -> LuxResult<SummarizeResponse>;

    async fn translate(&self, request: &TranslateRequest) -> LuxResult<TranslateResponse>;

    async fn meeting_notes(
        &self,
        upload: MeetingUpload,
        on_progress: Option<ProgressFn>,
    ) -> LuxResult<MeetingNotesResponse>;
}

/// Client for interacting with the LuxAI backend API
#[derive(Debug, Clone)]
pub struct LuxClient {
    client: Client,
    base_url: String,
}

impl LuxClient {
    /// Create a new LuxAI API client from the resolved configuration.
    pub fn new(config: &LuxConfig) -> LuxResult<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| LuxError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> LuxResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| LuxError::RequestError(format!("Failed to send request: {}", e)))?;

        Self::decode(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> LuxResult<R> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LuxError::RequestError(format!("Failed to send request: {}", e)))?;

        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> LuxResult<R> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.map_err(|e| {
                LuxError::ResponseError(format!("Failed to read error response: {}", e))
            })?;

            return Err(LuxError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", error_body),
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| LuxError::ParsingError(format!("Failed to parse response: {}", e)))
    }

    /// Summarize text via `/summarize/`.
    pub async fn summarize(&self, request: &SummarizeRequest) -> LuxResult<SummarizeResponse> {
        self.post_json("/summarize/", request).await
    }

    /// Translate text via `/translate/`.
    pub async fn translate(&self, request: &TranslateRequest) -> LuxResult<TranslateResponse> {
        self.post_json("/translate/", request).await
    }

    /// Generate meeting notes via `/meeting-notes/` as a multipart submission.
    ///
    /// When `on_progress` is given, it is invoked with a non-decreasing
    /// percentage of payload bytes handed to the transport, reaching 100 at
    /// the end of the upload phase.
    pub async fn meeting_notes(
        &self,
        upload: MeetingUpload,
        on_progress: Option<ProgressFn>,
    ) -> LuxResult<MeetingNotesResponse> {
        let url = self.endpoint("/meeting-notes/");
        debug!("POST {} (multipart, {} bytes)", url, upload.total_bytes());

        let counter = on_progress.map(|callback| UploadCounter::new(upload.total_bytes(), callback));

        let mut form = Form::new();
        if let Some(file) = upload.file {
            let name = file.name.clone();
            let part = payload_part(Bytes::from(file.bytes), counter.as_ref()).file_name(name);
            form = form.part("file", part);
        }
        if let Some(transcript) = upload.transcript.filter(|t| !t.is_empty()) {
            let part = payload_part(Bytes::from(transcript.into_bytes()), counter.as_ref());
            form = form.part("transcript", part);
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LuxError::RequestError(format!("Failed to send request: {}", e)))?;

        Self::decode(response).await
    }

    /// Check backend liveness via `/health/`.
    pub async fn health(&self) -> LuxResult<HealthResponse> {
        self.get_json("/health/").await
    }

    /// Fetch the productivity counters via `/stats/`.
    pub async fn stats(&self) -> LuxResult<ProductivityStats> {
        self.get_json("/stats/").await
    }
}

fn payload_part(data: Bytes, counter: Option<&Arc<UploadCounter>>) -> Part {
    let length = data.len() as u64;
    match counter {
        Some(counter) => Part::stream_with_length(
            Body::wrap_stream(TrackedPayload::new(data, Arc::clone(counter))),
            length,
        ),
        None => Part::stream_with_length(Body::from(data), length),
    }
}

#[async_trait]
impl ToolApi for LuxClient {
    async fn summarize(&self, request: &SummarizeRequest) -> LuxResult<SummarizeResponse> {
        LuxClient::summarize(self, request).await
    }

    async fn translate(&self, request: &TranslateRequest) -> LuxResult<TranslateResponse> {
        LuxClient::translate(self, request).await
    }

    async fn meeting_notes(
        &self,
        upload: MeetingUpload,
        on_progress: Option<ProgressFn>,
    ) -> LuxResult<MeetingNotesResponse> {
        LuxClient::meeting_notes(self, upload, on_progress).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection, consume the full request, answer with a canned
    /// HTTP response and close.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 64 * 1024];
                loop {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request_complete(&request) {
                                break;
                            }
                        }
                    }
                }
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&raw[..header_end]);
        if headers
            .lines()
            .any(|line| line.to_ascii_lowercase().starts_with("transfer-encoding: chunked"))
        {
            return raw.ends_with(b"0\r\n\r\n");
        }
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn client_for(base_url: String) -> LuxClient {
        let config = LuxConfig {
            api_base_url: Some(base_url),
            log_level: None,
        };
        LuxClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn summarize_decodes_success_shape() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"summary":"short version"}"#).await;
        let client = client_for(url);
        let response = client
            .summarize(&SummarizeRequest {
                text: "a".repeat(120),
                language: SummaryLanguage::English,
            })
            .await
            .unwrap();
        assert_eq!(response.summary, "short version");
    }

    #[tokio::test]
    async fn non_success_status_maps_to_http_error() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"error":"model unavailable"}"#,
        )
        .await;
        let client = client_for(url);
        let err = client
            .translate(&TranslateRequest {
                text: "hola".to_string(),
                target_language: TargetLanguage::Es,
            })
            .await
            .unwrap_err();
        match err {
            LuxError::HttpError { status_code, .. } => assert_eq!(status_code, 500),
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn meeting_notes_upload_reports_monotone_progress() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"notes":"polished","timeline":[{"timestamp":"5 min","title":"Kickoff","description":"intro"}]}"#,
        )
        .await;
        let client = client_for(url);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let on_progress: ProgressFn = Arc::new(move |percent| sink.lock().unwrap().push(percent));

        let upload = MeetingUpload {
            file: Some(UploadFile {
                name: "meeting.txt".to_string(),
                bytes: vec![b'x'; 200 * 1024],
            }),
            transcript: Some("agenda and decisions".to_string()),
        };
        let response = client.meeting_notes(upload, Some(on_progress)).await.unwrap();

        assert_eq!(response.notes, "polished");
        assert_eq!(response.timeline.unwrap().len(), 1);

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(*seen.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn health_decodes_status() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"status":"healthy","service":"LuxAI API"}"#,
        )
        .await;
        let client = client_for(url);
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "LuxAI API");
    }
}
