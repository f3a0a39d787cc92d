use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::Client;
use crate::config::{ClientConfig, FUTBIN_WEB_BASE};
use crate::error::{ConfigError, Error, MappingError, TransportError};
use crate::search::PlayerSearchOptions;
use crate::types::*;
use crate::user_agent;

const PLAYERS_PRICE_PATH: &str = "/getPlayersPrice";
const PRICE_INFORMATION_PATH: &str = "/fetchPriceInformation";
const POPULAR_PLAYERS_PATH: &str = "/getPopularPlayers";
const FILTERED_PLAYERS_PATH: &str = "/getFilteredPlayers";
const TOTW_PATH: &str = "/currentTOTW";
const NEW_PLAYERS_PATH: &str = "/newPlayers";
const LEAGUES_AND_CLUBS_PATH: &str = "/getLeaguesAndClubsAndroid";
const CARD_VERSIONS_PATH: &str = "/getCardVersions";

const NO_QUERY: &[(&str, &str)] = &[];

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Option<Vec<T>>,
}

/// Async FUTBIN client.
///
/// Clones share one connection pool. The pool is released when the last
/// clone is dropped (or passed to [`FutbinClient::close`]); dropping an
/// in-flight request future closes its connection instead of leaking it.
#[derive(Clone, Debug)]
pub struct FutbinClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl FutbinClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|source| ConfigError::Proxy {
                url: proxy.clone(),
                source,
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build().map_err(ConfigError::Http)?,
            config,
        })
    }

    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ends this handle's scope, releasing its share of the connection pool.
    pub fn close(self) {
        debug!(base_url = %self.config.base_url, "closing client");
    }

    /// One GET against `base_url + path`, returning the JSON body.
    pub async fn request<Q>(&self, path: &str, query: &Q) -> Result<Value, Error>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| TransportError::new(&url, e))?;

        let status = response.status();
        debug!(%url, %status, "response");
        if !status.is_success() {
            warn!(%url, %status, "upstream returned an error status");
        }

        let body = response
            .error_for_status()
            .map_err(|e| TransportError::new(&url, e))?
            .bytes()
            .await
            .map_err(|e| TransportError::new(&url, e))?;

        Ok(serde_json::from_slice(&body).map_err(|e| MappingError::new(path, e))?)
    }

    async fn fetch<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let value = self.request(path, query).await?;
        Ok(serde_json::from_value(value).map_err(|e| MappingError::new(path, e))?)
    }

    async fn fetch_list<T, Q>(&self, path: &str, query: &Q) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let envelope: DataEnvelope<T> = self.fetch(path, query).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(user_agent::random()));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.futbin.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static(FUTBIN_WEB_BASE));

    for (name, value) in &config.headers {
        let invalid = || ConfigError::Header { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Picks one player's quote out of a `getPlayersPrice` payload:
/// `{"<id>": {"prices": {"<platform>": {...}}}}`.
fn price_entry(payload: &Value, player_id: u64, platform: Platform) -> Result<PlayerPrice, serde_json::Error> {
    let entry = payload
        .get(player_id.to_string())
        .and_then(|player| player.get("prices"))
        .and_then(|prices| prices.get(platform.as_str()))
        .filter(|entry| !entry.is_null());

    match entry {
        Some(entry) => {
            let mut price = <PlayerPrice as Deserialize>::deserialize(entry)?;
            price.platform = platform;
            Ok(price)
        }
        None => Ok(PlayerPrice::empty(platform)),
    }
}

#[async_trait]
impl Client for FutbinClient {
    async fn get_player_price(
        &self,
        player_id: u64,
        platform: Platform,
    ) -> Result<PlayerPrice, Error> {
        let mut prices = self.get_players_prices(&[player_id], platform).await?;
        Ok(prices
            .remove(&player_id)
            .unwrap_or_else(|| PlayerPrice::empty(platform)))
    }

    async fn get_player_price_by_resource_id(
        &self,
        resource_id: u64,
        platform: Platform,
    ) -> Result<PlayerPrice, Error> {
        let resource_id = resource_id.to_string();
        let query = [
            ("playerresource", resource_id.as_str()),
            ("platform", platform.as_str()),
        ];
        let mut price: PlayerPrice = self.fetch(PRICE_INFORMATION_PATH, &query).await?;
        price.platform = platform;
        Ok(price)
    }

    async fn get_players_prices(
        &self,
        player_ids: &[u64],
        platform: Platform,
    ) -> Result<HashMap<u64, PlayerPrice>, Error> {
        if player_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids = player_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let query = [("player_ids", ids.as_str()), ("platform", platform.as_str())];
        let payload = self.request(PLAYERS_PRICE_PATH, &query).await?;

        player_ids
            .iter()
            .map(|&id| -> Result<(u64, PlayerPrice), Error> {
                let price = price_entry(&payload, id, platform)
                    .map_err(|e| MappingError::new(PLAYERS_PRICE_PATH, e))?;
                Ok((id, price))
            })
            .collect()
    }

    async fn get_popular_players(&self) -> Result<Vec<PopularPlayer>, Error> {
        self.fetch_list(POPULAR_PLAYERS_PATH, NO_QUERY).await
    }

    async fn search_players(&self, options: &PlayerSearchOptions) -> Result<Vec<FullPlayer>, Error> {
        self.fetch_list(FILTERED_PLAYERS_PATH, &options.to_params())
            .await
    }

    async fn get_totw(&self) -> Result<Vec<FullPlayer>, Error> {
        self.fetch_list(TOTW_PATH, NO_QUERY).await
    }

    async fn get_latest_players(&self) -> Result<Vec<FullPlayer>, Error> {
        self.fetch_list(NEW_PLAYERS_PATH, NO_QUERY).await
    }

    async fn get_leagues_and_clubs(&self) -> Result<Vec<League>, Error> {
        self.fetch_list(LEAGUES_AND_CLUBS_PATH, NO_QUERY).await
    }

    async fn get_card_versions(&self) -> Result<Vec<CardVersionInfo>, Error> {
        self.fetch_list(CARD_VERSIONS_PATH, NO_QUERY).await
    }
}
