use crate::config::Config;
use crate::demo;
use crate::error::LookupError;
use crate::normalize::{normalize, LookupResponse};
use crate::plate::Plate;
use crate::types::{Lookup, Source, VehicleRecord};
use log::{debug, info};
use serde_json::Value;
use url::{Host, Url};

// Error bodies can be whole HTML pages; keep log lines readable.
const MAX_ERROR_BODY: usize = 200;

pub struct Fetcher {
    client: reqwest::Client,
    config: Config,
}

impl Fetcher {
    pub fn new(config: Config) -> Result<Fetcher, failure::Error> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if is_loopback(&config.endpoint) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Fetcher { client, config })
    }

    /// Looks the plate up live, substituting demo data on any failure.
    pub async fn lookup(&self, plate: &Plate) -> Lookup {
        match self.fetch(plate).await {
            Ok(record) => {
                info!("Live lookup succeeded for {}", plate);
                Lookup {
                    record,
                    source: Source::Live,
                }
            }
            Err(e) => {
                info!("Live lookup unavailable for {}: {}; using demo data", plate, e);
                Lookup {
                    record: demo::lookup(plate),
                    source: Source::Demo,
                }
            }
        }
    }

    pub async fn fetch(&self, plate: &Plate) -> Result<VehicleRecord, LookupError> {
        if self.config.offline {
            return Err(LookupError::Offline);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LookupError::MissingApiKey)?;

        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("vehicle_number", plate.as_str());
        let host = self.config.endpoint.host_str().unwrap_or_default().to_string();
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", host)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        normalize(LookupResponse::classify(value))
    }
}

// Local endpoints are never reached through a system proxy.
fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        None => false,
    }
}
