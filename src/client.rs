use crate::models::StatusSummary;
use colored::*;
use std::time::Duration;

pub const API_URL: &str = "https://status.redhat.com/api/v2/summary.json";

pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            url: API_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug)]
pub enum TransportError {
    Timeout,
    Network(String),
}

/// One blocking GET against the status endpoint. Split out as a trait so the
/// retry loop can be driven by a scripted transport in tests.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;
}

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Network(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Fetches the status summary, retrying transient failures up to the
/// configured limit. Returns `None` once the attempts are exhausted (or on a
/// body that does not parse); failures are reported on stdout, never raised.
pub fn fetch_summary(config: &FetchConfig, transport: &dyn Transport) -> Option<StatusSummary> {
    for attempt in 1..=config.max_retries {
        println!(
            "🌐 Fetching Red Hat Status data... (attempt {}/{})",
            attempt, config.max_retries
        );
        match transport.get(&config.url, config.timeout) {
            Ok(response) if response.status == 200 => {
                println!("✅ Data received: {} characters", response.body.len());
                match serde_json::from_str::<StatusSummary>(&response.body) {
                    Ok(summary) => return Some(summary),
                    Err(e) => {
                        // the endpoint is answering, retrying won't fix the body
                        println!("{} {}", "❌ Error:".red(), e);
                        break;
                    }
                }
            }
            Ok(response) => {
                println!("{} {}", "❌ HTTP Error:".red(), response.status);
            }
            Err(TransportError::Timeout) => {
                println!(
                    "⏰ Request timeout (attempt {}/{})",
                    attempt, config.max_retries
                );
            }
            Err(TransportError::Network(e)) => {
                println!("{} {}", "❌ Network error:".red(), e);
            }
        }
        if attempt < config.max_retries {
            println!("🔄 Retrying in {} seconds...", config.retry_delay.as_secs());
            std::thread::sleep(config.retry_delay);
        }
    }
    println!(
        "{}",
        format!(
            "❌ Failed to fetch data after {} attempts",
            config.max_retries
        )
        .red()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const EMPTY_SUMMARY: &str = r#"{"page": {}, "status": {}, "components": []}"#;

    struct ScriptedTransport {
        calls: Cell<u32>,
        failures_before_success: u32,
        failure: fn() -> Result<HttpResponse, TransportError>,
        success_body: &'static str,
    }

    impl ScriptedTransport {
        fn new(
            failures_before_success: u32,
            failure: fn() -> Result<HttpResponse, TransportError>,
        ) -> Self {
            ScriptedTransport {
                calls: Cell::new(0),
                failures_before_success,
                failure,
                success_body: EMPTY_SUMMARY,
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn get(&self, _url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call <= self.failures_before_success {
                (self.failure)()
            } else {
                Ok(HttpResponse {
                    status: 200,
                    body: self.success_body.to_string(),
                })
            }
        }
    }

    fn test_config() -> FetchConfig {
        FetchConfig {
            url: "http://localhost/summary.json".to_string(),
            timeout: Duration::from_millis(10),
            max_retries: 3,
            retry_delay: Duration::from_millis(0),
        }
    }

    #[test]
    fn succeeds_after_two_transient_failures() {
        // Arrange
        let transport = ScriptedTransport::new(2, || {
            Err(TransportError::Network("connection refused".to_string()))
        });

        // Act
        let result = fetch_summary(&test_config(), &transport);

        // Assert
        assert!(result.is_some());
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn gives_up_after_max_retries_when_every_attempt_times_out() {
        // Arrange
        let transport = ScriptedTransport::new(u32::MAX, || Err(TransportError::Timeout));

        // Act
        let result = fetch_summary(&test_config(), &transport);

        // Assert
        assert!(result.is_none());
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn non_200_responses_are_retried_to_exhaustion() {
        // Arrange
        struct ServerError {
            calls: Cell<u32>,
        }
        impl Transport for ServerError {
            fn get(&self, _url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
                self.calls.set(self.calls.get() + 1);
                Ok(HttpResponse {
                    status: 503,
                    body: String::new(),
                })
            }
        }
        let transport = ServerError {
            calls: Cell::new(0),
        };

        // Act
        let result = fetch_summary(&test_config(), &transport);

        // Assert
        assert!(result.is_none());
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn malformed_body_aborts_without_further_retries() {
        // Arrange
        let transport = ScriptedTransport {
            calls: Cell::new(0),
            failures_before_success: 0,
            failure: || Err(TransportError::Timeout),
            success_body: "not json at all",
        };

        // Act
        let result = fetch_summary(&test_config(), &transport);

        // Assert
        assert!(result.is_none());
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn first_attempt_success_makes_a_single_request() {
        // Arrange
        let transport = ScriptedTransport::new(0, || Err(TransportError::Timeout));

        // Act
        let result = fetch_summary(&test_config(), &transport);

        // Assert
        assert!(result.is_some());
        assert_eq!(transport.calls.get(), 1);
    }
}
