//! A [Vercel DNS API] implementation of the [`RecordProvider`][super::RecordProvider] trait.
//!
//! Both operations use the `v4` domain records endpoint:
//!
//! ```text
//! GET  https://api.vercel.com/v4/domains/{domain}/records
//! POST https://api.vercel.com/v4/domains/{domain}/records
//! ```
//!
//! authenticated with an `Authorization: Bearer <token>` header.
//!
//! [Vercel DNS API]: https://vercel.com/docs/rest-api/endpoints/dns
use crate::error::Error;
use crate::records::{DnsRecord, RecordProvider, RecordSet};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";

/// A stateless client for the Vercel DNS API. Cloning is cheap and clones share a connection
/// pool.
#[derive(Clone)]
pub struct VercelClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl VercelClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` can't have path segments appended
    /// (e.g. `mailto:` or `data:` URLs).
    pub fn new(base_url: Url, token: String) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(VercelClient {
            http: Client::new(),
            base_url,
            token,
        })
    }

    fn records_url(&self, domain: &str) -> Url {
        let mut url = self.base_url.clone();
        // NB: unwrap is safe, `new` rejected cannot-be-a-base URLs.
        url.path_segments_mut()
            .unwrap()
            .pop_if_empty()
            .extend(["v4", "domains", domain, "records"]);
        url
    }

    async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&T>,
    ) -> Result<Response, Error> {
        tracing::debug!("{method} {url}");
        let mut request = self.http.request(method, url).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(status));
        }
        Ok(response)
    }
}

impl std::fmt::Debug for VercelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VercelClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl RecordProvider for VercelClient {
    async fn list_records(&self, domain: &str) -> Result<RecordSet, Error> {
        let url = self.records_url(domain);
        let response = self.request::<()>(Method::GET, url, None).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    async fn create_txt_record(&self, domain: &str, value: &str) -> Result<(), Error> {
        let url = self.records_url(domain);
        let record = DnsRecord::apex_txt(value.to_string());
        self.request(Method::POST, url, Some(&record)).await?;
        Ok(())
    }
}
