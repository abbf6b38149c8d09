//! Vehicle API
//!
//! The single remote interaction: an unauthenticated GET returning the
//! baseline vehicle list as a JSON array. [`VehicleSource`] is the seam the
//! store fetches through, so tests and alternative backends can stand in
//! for the HTTP client.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use snafu::ResultExt;

use crate::domain::config::ApiConfig;
use crate::domain::vehicle::Vehicle;
use crate::error::{DecodeSnafu, RequestSnafu, Result, StatusSnafu};

/// Anything the store can load the full vehicle list from
pub trait VehicleSource: Send + Sync {
    /// Fetch the complete collection
    fn fetch_vehicles(&self) -> BoxFuture<'_, Result<Vec<Vehicle>>>;
}

/// HTTP client for the remote vehicle endpoint
#[derive(Clone)]
pub struct VehicleApi {
    client: reqwest::Client,
    url: String,
}

impl VehicleApi {
    /// Create a client for the configured endpoint
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context(RequestSnafu {
            url: config.url.clone(),
        })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_vehicles(&self) -> Result<Vec<Vehicle>> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context(RequestSnafu { url: self.url.clone() })?;

        let status = response.status();
        if !status.is_success() {
            return StatusSnafu {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .fail();
        }

        let body = response
            .bytes()
            .await
            .context(RequestSnafu { url: self.url.clone() })?;
        let vehicles = decode_vehicles(&body)?;

        tracing::debug!("Received {} vehicles from {}", vehicles.len(), self.url);
        Ok(vehicles)
    }
}

impl VehicleSource for VehicleApi {
    fn fetch_vehicles(&self) -> BoxFuture<'_, Result<Vec<Vehicle>>> {
        self.get_vehicles().boxed()
    }
}

impl std::fmt::Debug for VehicleApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VehicleApi").field("url", &self.url).finish()
    }
}

/// Parse a response body as a JSON array of vehicles
pub fn decode_vehicles(body: &[u8]) -> Result<Vec<Vehicle>> {
    serde_json::from_slice(body).context(DecodeSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const ONE_VEHICLE: &str = r#"[{"id":1,"name":"Toyota","model":"Camry","year":2021,"color":"red","price":20000,"latitude":59.9,"longitude":30.3}]"#;

    /// Serve one canned HTTP response on a loopback port and return its URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/test-task/vehicles")
    }

    fn api_for(url: String) -> VehicleApi {
        VehicleApi::new(&ApiConfig {
            url,
            timeout_secs: Some(5),
        })
        .expect("client")
    }

    #[test]
    fn test_decode_vehicle_array() {
        let vehicles = decode_vehicles(ONE_VEHICLE.as_bytes()).expect("decode");
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].name, "Toyota");
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_vehicles(b"<html>oops</html>").expect_err("not json");
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_object_body() {
        let err = decode_vehicles(br#"{"vehicles":[]}"#).expect_err("not an array");
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let url = serve_once("200 OK", ONE_VEHICLE).await;
        let api = api_for(url);

        let vehicles = api.fetch_vehicles().await.expect("fetch");
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].model, "Camry");
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status() {
        let url = serve_once("503 Service Unavailable", "[]").await;
        let api = api_for(url);

        let err = api.fetch_vehicles().await.expect_err("status error");
        assert!(matches!(err, Error::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let api = api_for(format!("http://{addr}/vehicles"));
        let err = api.fetch_vehicles().await.expect_err("refused");
        assert!(matches!(err, Error::Request { .. }));
    }
}
