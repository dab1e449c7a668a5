use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Result, SyncError};
use crate::sakura::types::*;

/// The three CommonServiceItem calls the directory needs. Split out as a
/// trait so sync logic can run against an in-memory fake in tests.
pub trait CommonServiceApi {
    /// Bulk list of every resource item in the account. The API has no
    /// cursor pagination for this resource type; `{Count: 0}` returns all.
    fn list_items(&self) -> Result<Vec<CommonServiceItem>>;

    /// Creates a zone resource. The response carries the assigned `ID`.
    fn create_item(&self, item: &ZoneCreateItem) -> Result<CommonServiceItem>;

    /// Replaces the entire record list of the identified zone resource.
    fn update_item(&self, id: &str, rows: Vec<RecordRow>) -> Result<CommonServiceItem>;
}

#[derive(Clone)]
pub struct SakuraClient {
    http: Client,
    endpoint: String, // e.g. "https://secure.sakura.ad.jp/cloud/zone/is1a/api/cloud/1.1"
    access_token: String,
    access_token_secret: String,
    timeout: Duration,
}

impl SakuraClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            access_token: config.access_token.clone(),
            access_token_secret: config.access_token_secret.clone(),
            timeout: config.timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        debug!(method = %method, url = %url, "request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.access_token, Some(&self.access_token_secret))
            .timeout(self.timeout);
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req.send().map_err(|e| SyncError::Transport {
            method: method.to_string(),
            url: url.clone(),
            source: e,
        })?;
        let status = res.status();
        debug!(status = %status, "response");

        if !status.is_success() {
            let err = res.json::<ApiErrorBody>().unwrap_or_else(|_| ApiErrorBody {
                status: status.to_string(),
                ..ApiErrorBody::default()
            });
            return Err(SyncError::Api {
                method: method.to_string(),
                url,
                status: err.status,
                serial: err.serial,
                error_code: err.error_code,
                error_msg: html_escape::decode_html_entities(&err.error_msg).into_owned(),
            });
        }

        res.json::<T>().map_err(|e| SyncError::Transport {
            method: method.to_string(),
            url,
            source: e,
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, self.url(path), None)
    }

    fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        // serde_json::to_value on our own request types cannot fail
        let body = serde_json::to_value(body).unwrap_or_default();
        self.send(method, self.url(path), Some(body))
    }
}

impl CommonServiceApi for SakuraClient {
    fn list_items(&self) -> Result<Vec<CommonServiceItem>> {
        // The query string is flow-style YAML, percent-encoded.
        let path = format!("/commonserviceitem?{}", urlencoding::encode("{Count: 0}"));
        let resp: ItemListResponse = self.get(&path)?;
        Ok(resp.common_service_items)
    }

    fn create_item(&self, item: &ZoneCreateItem) -> Result<CommonServiceItem> {
        let resp: ItemResponse = self.send_json(
            Method::POST,
            "/commonserviceitem",
            &ItemEnvelope {
                common_service_item: item,
            },
        )?;
        Ok(resp.common_service_item)
    }

    fn update_item(&self, id: &str, rows: Vec<RecordRow>) -> Result<CommonServiceItem> {
        let body = ItemEnvelope {
            common_service_item: ZoneUpdateItem {
                settings: ItemSettings::with_rows(rows),
            },
        };
        let resp: ItemResponse =
            self.send_json(Method::PUT, &format!("/commonserviceitem/{}", id), &body)?;
        Ok(resp.common_service_item)
    }
}
