//! Data store backed by a PostgREST endpoint such as the one Supabase exposes.
use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;

use super::DataStore;
use crate::config::StoreConfig;
use crate::domain::AccountRef;
use crate::domain::Chain;
use crate::domain::ChainId;
use crate::domain::NewAccount;
use crate::domain::NewChain;
use crate::domain::StoreError;

const CHAINS: &str = "chains";
const ACCOUNTS: &str = "accounts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the `chains` and `accounts` tables.
pub struct RestDataStore {
    client: Client,
    base_url: String,
}

impl fmt::Debug for RestDataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestDataStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RestDataStore {
    /// Builds the HTTP client once. Every request carries the service key both as
    /// `apikey` and as a bearer token.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::with_builder(config, Client::builder())
    }

    fn with_builder(config: &StoreConfig, builder: ClientBuilder) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(config.key())?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = builder
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(RestDataStore {
            client,
            base_url: rest_base(config.url().as_str()),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn insert<T, R>(&self, table: &str, body: &T) -> Result<Vec<R>, StoreError>
    where
        T: serde::Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body)
            .send()?;
        decode(check(response)?)
    }
}

/// `https://x.supabase.co/` becomes `https://x.supabase.co/rest/v1`.
fn rest_base(url: &str) -> String {
    format!("{}/rest/v1", url.trim_end_matches('/'))
}

/// PostgREST equality filter, with the value percent-encoded.
fn eq_filter(column: &str, value: &str) -> String {
    format!("{}=eq.{}", column, urlencoding::encode(value))
}

fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().unwrap_or_default();
    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}

fn decode<R: DeserializeOwned>(response: Response) -> Result<Vec<R>, StoreError> {
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

impl DataStore for RestDataStore {
    fn insert_chain(&self, chain: &NewChain) -> Result<Chain, StoreError> {
        let mut rows: Vec<Chain> = self.insert(CHAINS, chain)?;
        if rows.is_empty() {
            return Err(StoreError::EmptyResponse(CHAINS.to_string()));
        }
        Ok(rows.swap_remove(0))
    }

    fn find_accounts_by_email(&self, email: &str) -> Result<Vec<AccountRef>, StoreError> {
        let url = format!(
            "{}?select=id&{}",
            self.table_url(ACCOUNTS),
            eq_filter("email", email)
        );
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        decode(check(response)?)
    }

    fn insert_accounts(&self, accounts: &[NewAccount]) -> Result<usize, StoreError> {
        let rows: Vec<serde_json::Value> = self.insert(ACCOUNTS, accounts)?;
        Ok(rows.len())
    }

    fn delete_accounts_by_chain(&self, chain_id: &ChainId) -> Result<(), StoreError> {
        let url = format!(
            "{}?{}",
            self.table_url(ACCOUNTS),
            eq_filter("chain_id", &chain_id.to_string())
        );
        debug!("DELETE {}", url);
        check(self.client.delete(url).send()?)?;
        Ok(())
    }

    fn delete_chain(&self, chain_id: &ChainId) -> Result<(), StoreError> {
        let url = format!(
            "{}?{}",
            self.table_url(CHAINS),
            eq_filter("id", &chain_id.to_string())
        );
        debug!("DELETE {}", url);
        check(self.client.delete(url).send()?)?;
        Ok(())
    }
}
