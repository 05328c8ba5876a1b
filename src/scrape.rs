use crate::config::Config;
use crate::errors::FetchError;
use std::error::Error;
use std::time::Duration;

/// A fully read response with a success status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Declared `Content-Length`, if the server sent one
    pub content_length: Option<u64>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Request/response boundary for both the image host and the page host.
///
/// Non-success statuses are reported as `FetchError::Status`, so callers
/// only ever see successful responses in `Ok`.
pub trait Transport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError>;
}

fn get_error(error: &reqwest::Error) -> String {
    match error.source() {
        Some(e) => match e.source() {
            Some(e) => e.to_string(),
            None => e.to_string(),
        },
        None => error.to_string(),
    }
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_idle_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, timeout: Option<Duration>) -> Result<HttpResponse, FetchError> {
        let request_error = |err: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            message: if err.is_timeout() {
                "timed out".to_string()
            } else {
                get_error(&err)
            },
        };

        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        log::debug!("{url}: requesting");
        let resp = request.send().map_err(request_error)?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!("{url}: {status}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_length = resp.content_length();
        let body = resp.bytes().map_err(request_error)?;
        log::debug!("{url}: {} bytes (declared {content_length:?})", body.len());

        Ok(HttpResponse {
            status: status.as_u16(),
            content_length,
            body: body.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossy_text() {
        let resp = HttpResponse {
            status: 200,
            content_length: None,
            body: vec![b'o', b'k', 0xff],
        };
        assert_eq!(resp.text(), "ok\u{fffd}");
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(ReqwestTransport::new(&Config::default()).is_ok());
    }
}
