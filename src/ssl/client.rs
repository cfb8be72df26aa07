use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::models::AddSslCertificateDto;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Certificate service rejected the request with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Creation side of the certificate-monitoring backend. The failure reason
/// is opaque to the form; it only decides retry presentation.
#[async_trait]
pub trait CertificateCreator {
    async fn create(&self, certificate: &AddSslCertificateDto) -> Result<(), SubmissionError>;
}

/// Creates monitoring entries on the monitoring server over HTTP.
pub struct HttpCertificateClient {
    client: Client,
    base_url: String,
}

impl HttpCertificateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CertificateCreator for HttpCertificateClient {
    async fn create(&self, certificate: &AddSslCertificateDto) -> Result<(), SubmissionError> {
        let url = format!("{}/api/ssl-certificates", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(certificate).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(SubmissionError::Rejected { status, body });
        }

        Ok(())
    }
}
