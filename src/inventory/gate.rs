//! Spinnaker Gate subnet inventory over HTTPS.

use super::retry::RetryPolicy;
use super::{decode_records, SubnetInventory};
use crate::config;
use crate::error::{Result, SubnetError};
use crate::models::RawSubnetRecord;
use colored::Colorize;
use reqwest::blocking::Client;
use reqwest::{Certificate, Identity, StatusCode};
use std::path::Path;
use std::time::Duration;

/// Blocking client for `GET {api_url}/subnets/aws`.
#[derive(Debug, Clone)]
pub struct GateClient {
    client: Client,
    subnet_url: String,
    retry: RetryPolicy,
}

impl GateClient {
    /// Build a client, loading the optional client certificate (PEM with the
    /// certificate and its key) and CA bundle.
    pub fn new(
        api_url: &str,
        client_cert: Option<&Path>,
        ca_bundle: Option<&Path>,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config::HTTP_TIMEOUT_SEC));

        if let Some(path) = client_cert {
            log::debug!("Using Gate client certificate {}", path.display());
            builder = builder.identity(Identity::from_pem(&read_pem(path)?)?);
        }
        if let Some(path) = ca_bundle {
            log::debug!("Using Gate CA bundle {}", path.display());
            for cert in Certificate::from_pem_bundle(&read_pem(path)?)? {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(GateClient {
            client: builder.build()?,
            subnet_url: subnet_url(api_url),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn subnet_url(&self) -> &str {
        &self.subnet_url
    }

    fn fetch_once(&self, attempt: u32) -> Result<Vec<RawSubnetRecord>> {
        log::debug!(
            "GET {url} attempt #{attempt}",
            url = self.subnet_url.as_str().on_blue()
        );
        let response = self.client.get(&self.subnet_url).send()?;
        let status = response.status();
        let body = response.text()?;
        interpret_response(status, &body)
    }
}

impl SubnetInventory for GateClient {
    fn fetch_all_subnets(&self) -> Result<Vec<RawSubnetRecord>> {
        let subnets = self
            .retry
            .run(|attempt| self.fetch_once(attempt), SubnetError::is_remote_timeout)?;
        log::info!(
            "Got {} subnet records from {}",
            subnets.len(),
            self.subnet_url
        );
        log::debug!("Configured Subnets: {:?}", subnets);
        Ok(subnets)
    }
}

/// Join the Gate base URL and the subnet listing path.
pub fn subnet_url(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), config::SUBNETS_PATH)
}

/// Turn a Gate response into records. Any non-2xx status is the retryable
/// [`SubnetError::RemoteTimeout`], carrying the body.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Vec<RawSubnetRecord>> {
    if !status.is_success() {
        log::warn!(
            "{failed} Gate responded {status}",
            failed = "failed".on_red()
        );
        log::trace!("Gate response body:\n{body}");
        return Err(SubnetError::RemoteTimeout {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    decode_records(body)
}

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| SubnetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
