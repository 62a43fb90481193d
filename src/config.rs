//! Runtime configuration.
//!
//! Values come from the process environment; `main` loads a `.env` file first
//! with `dotenv` so local runs can keep them next to the binary.

use crate::error::{Result, SubnetError};
use crate::resolver::SubnetQuery;
use std::path::PathBuf;

/// Attempts made against Gate before giving up on a non-OK response.
pub const RETRY_MAX_ATTEMPTS: u32 = 6;
/// Pause between attempts.
pub const RETRY_DELAY_MSEC: u64 = 2_000;
/// Per-request timeout for the Gate HTTP client.
pub const HTTP_TIMEOUT_SEC: u64 = 30;

pub const DEFAULT_TARGET: &str = "ec2";
pub const DEFAULT_PURPOSE: &str = "internal";

/// Path of the Gate endpoint listing every AWS subnet.
pub const SUBNETS_PATH: &str = "/subnets/aws";

/// Where the inventory comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    /// Live Gate API.
    Gate {
        api_url: String,
        client_cert: Option<PathBuf>,
        ca_bundle: Option<PathBuf>,
    },
    /// Captured `/subnets/aws` response on disk.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Summary,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: InventorySource,
    pub query: SubnetQuery,
    pub output: OutputFormat,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = match get("SUBNET_INVENTORY_FILE") {
            Some(file) => InventorySource::File(PathBuf::from(file)),
            None => {
                let api_url = get("GATE_API_URL").ok_or_else(|| {
                    SubnetError::Config(
                        "GATE_API_URL or SUBNET_INVENTORY_FILE must be set".to_string(),
                    )
                })?;
                InventorySource::Gate {
                    api_url: api_url.trim_end_matches('/').to_string(),
                    client_cert: get("GATE_CLIENT_CERT").map(PathBuf::from),
                    ca_bundle: get("GATE_CA_BUNDLE").map(PathBuf::from),
                }
            }
        };

        let mut query = SubnetQuery::default();
        if let Some(target) = get("SUBNET_TARGET") {
            query = query.target(target);
        }
        if let Some(purpose) = get("SUBNET_PURPOSE") {
            query = query.purpose(purpose);
        }
        if let Some(env) = get("SUBNET_ENV") {
            query = query.env(env);
        }
        if let Some(region) = get("SUBNET_REGION") {
            query = query.region(region);
        }

        let output = match get("SUBNET_OUTPUT").as_deref() {
            None | Some("json") => OutputFormat::Json,
            Some("summary") => OutputFormat::Summary,
            Some(other) => {
                return Err(SubnetError::Config(format!(
                    "SUBNET_OUTPUT must be 'json' or 'summary', got '{other}'"
                )))
            }
        };

        Ok(Config {
            source,
            query,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_gate_source_with_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("GATE_API_URL", "https://gate.example.com/"),
            ("GATE_CLIENT_CERT", "/etc/gate/client.pem"),
        ]))
        .expect("config should load");

        assert_eq!(
            config.source,
            InventorySource::Gate {
                api_url: "https://gate.example.com".to_string(),
                client_cert: Some(PathBuf::from("/etc/gate/client.pem")),
                ca_bundle: None,
            }
        );
        assert_eq!(config.query, SubnetQuery::default());
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_file_source_wins_over_gate() {
        let config = Config::from_lookup(lookup(&[
            ("GATE_API_URL", "https://gate.example.com"),
            ("SUBNET_INVENTORY_FILE", "subnets.json"),
            ("SUBNET_TARGET", "elb"),
            ("SUBNET_ENV", "prod"),
            ("SUBNET_REGION", "us-west-2"),
            ("SUBNET_OUTPUT", "summary"),
        ]))
        .expect("config should load");

        assert_eq!(
            config.source,
            InventorySource::File(PathBuf::from("subnets.json"))
        );
        assert_eq!(config.query.target, "elb");
        assert_eq!(config.query.purpose, DEFAULT_PURPOSE);
        assert!(config.query.is_scoped());
        assert_eq!(config.output, OutputFormat::Summary);
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let err = Config::from_lookup(lookup(&[("GATE_API_URL", "  ")])).unwrap_err();
        assert!(matches!(err, SubnetError::Config(_)));
    }

    #[test]
    fn test_unknown_output_format() {
        let err = Config::from_lookup(lookup(&[
            ("SUBNET_INVENTORY_FILE", "subnets.json"),
            ("SUBNET_OUTPUT", "yaml"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SubnetError::Config(_)));
    }
}
