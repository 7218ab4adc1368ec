//! HTTP-backed catalog and dispatch implementations.
//!
//! These talk to the deployment platform's REST surfaces: a template
//! catalog service, a deployment API and a queue publish gateway.

mod catalog;
mod sink;

pub use catalog::HttpCatalog;
pub use sink::{ApiSink, QueueSink};

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

pub(crate) fn http_client() -> Client {
    Client::builder()
        .user_agent(concat!("hangar-mcp/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub(crate) fn add_auth(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", format!("Bearer {}", token)),
        None => request,
    }
}

/// Normalize a base URL so joined paths never end up with a double slash.
pub(crate) fn trim_base(url: impl Into<String>) -> String {
    let mut url = url.into();
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_base_strips_trailing_slashes() {
        assert_eq!(trim_base("http://api.local/"), "http://api.local");
        assert_eq!(trim_base("http://api.local//"), "http://api.local");
        assert_eq!(trim_base("http://api.local"), "http://api.local");
    }
}
