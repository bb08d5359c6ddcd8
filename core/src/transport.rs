//! `Transport` backed by a pooled `reqwest::Client`.

use async_trait::async_trait;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, BoxError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Resolves request paths against a service root and sends them with
/// reqwest. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { client, base_url: parse_base_url(base_url)? })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Config(e.to_string()))?;
        Self::with_client(client, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn resolve(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Relative paths replace the last segment of a base without a trailing
/// slash, so one is always added.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let url = self.resolve(&request.path)?;
        let mut builder = self.client.request(to_reqwest_method(request.method), url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_added() {
        let transport = ReqwestTransport::new("http://localhost:3000/api").unwrap();
        assert_eq!(transport.base_url().as_str(), "http://localhost:3000/api/");
        assert_eq!(
            transport.resolve("albums/createitem").unwrap().as_str(),
            "http://localhost:3000/api/albums/createitem"
        );
    }

    #[test]
    fn query_survives_resolution() {
        let transport = ReqwestTransport::new("http://localhost:3000/").unwrap();
        let url = transport
            .resolve("albums/read?seeded=true&flat=true&filter=&pagenr=0&pagesize=10")
            .unwrap();
        assert_eq!(url.path(), "/albums/read");
        assert_eq!(url.query(), Some("seeded=true&flat=true&filter=&pagenr=0&pagesize=10"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ReqwestTransport::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = ClientConfig::new("https://music.example.com/v1")
            .with_timeout(std::time::Duration::from_secs(5));
        let transport = ReqwestTransport::from_config(&config).unwrap();
        assert_eq!(transport.base_url().as_str(), "https://music.example.com/v1/");
    }
}
