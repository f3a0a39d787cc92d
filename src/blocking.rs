//! Blocking wrapper over [`FutbinClient`].
//!
//! Each call runs the async request to completion on a current-thread tokio
//! runtime owned by the wrapper. Do not call these methods from inside an
//! async context; tokio panics on a nested `block_on`. Use the async client
//! there instead.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::api_client::FutbinClient;
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{ConfigError, Error};
use crate::search::PlayerSearchOptions;
use crate::types::{CardVersionInfo, FullPlayer, League, Platform, PlayerPrice, PopularPlayer};

#[derive(Debug)]
pub struct BlockingClient {
    inner: FutbinClient,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ConfigError::Runtime)?;
        Ok(Self {
            inner: FutbinClient::new(config)?,
            runtime,
        })
    }

    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// The async client behind this wrapper; it shares the same pool.
    pub fn async_client(&self) -> &FutbinClient {
        &self.inner
    }

    /// Drops the connection pool, then shuts the runtime down.
    pub fn close(self) {
        let Self { inner, runtime } = self;
        inner.close();
        drop(runtime);
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn request<Q>(&self, path: &str, query: &Q) -> Result<Value, Error>
    where
        Q: Serialize + ?Sized,
    {
        self.block_on(self.inner.request(path, query))
    }

    pub fn get_player_price(&self, player_id: u64, platform: Platform) -> Result<PlayerPrice, Error> {
        self.block_on(self.inner.get_player_price(player_id, platform))
    }

    pub fn get_player_price_by_resource_id(
        &self,
        resource_id: u64,
        platform: Platform,
    ) -> Result<PlayerPrice, Error> {
        self.block_on(self.inner.get_player_price_by_resource_id(resource_id, platform))
    }

    pub fn get_players_prices(
        &self,
        player_ids: &[u64],
        platform: Platform,
    ) -> Result<HashMap<u64, PlayerPrice>, Error> {
        self.block_on(self.inner.get_players_prices(player_ids, platform))
    }

    pub fn get_popular_players(&self) -> Result<Vec<PopularPlayer>, Error> {
        self.block_on(self.inner.get_popular_players())
    }

    pub fn search_players(&self, options: &PlayerSearchOptions) -> Result<Vec<FullPlayer>, Error> {
        self.block_on(self.inner.search_players(options))
    }

    pub fn get_totw(&self) -> Result<Vec<FullPlayer>, Error> {
        self.block_on(self.inner.get_totw())
    }

    pub fn get_latest_players(&self) -> Result<Vec<FullPlayer>, Error> {
        self.block_on(self.inner.get_latest_players())
    }

    pub fn get_leagues_and_clubs(&self) -> Result<Vec<League>, Error> {
        self.block_on(self.inner.get_leagues_and_clubs())
    }

    pub fn get_card_versions(&self) -> Result<Vec<CardVersionInfo>, Error> {
        self.block_on(self.inner.get_card_versions())
    }
}

#[cfg(test)]
mod test {
    use std::time::{Duration, Instant};

    use mockito::Matcher;

    use crate::blocking::BlockingClient;
    use crate::config::ClientConfig;
    use crate::error::TransportErrorKind;
    use crate::types::Platform;

    #[test]
    fn test_blocking_price_and_leagues() {
        let mut server = mockito::Server::new();
        let client = BlockingClient::new(ClientConfig::new(server.url())).unwrap();

        let prices = server
            .mock("GET", "/getPlayersPrice")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("player_ids".into(), "5,6".into()),
                Matcher::UrlEncoded("platform".into(), "PS".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"6": {"prices": {"PS": {"LCPrice": "600"}}}, "5": {"prices": {"PS": {"LCPrice": "500"}}}}"#)
            .create();
        let leagues = server
            .mock("GET", "/getLeaguesAndClubsAndroid")
            .with_status(200)
            .with_body(r#"{"data": [{"id": 13, "name": "Premier League", "clubs": [{"id": 1, "name": "Arsenal"}]}]}"#)
            .create();

        let result = client.get_players_prices(&[5, 6], Platform::Ps).unwrap();
        prices.assert();
        assert_eq!(result[&5].price, 500);
        assert_eq!(result[&6].price, 600);

        let result = client.get_leagues_and_clubs().unwrap();
        leagues.assert();
        assert_eq!(result[0].clubs[0].name, "Arsenal");

        client.close();
    }

    #[test]
    fn test_blocking_raw_request() {
        let mut server = mockito::Server::new();
        let client = BlockingClient::new(ClientConfig::new(server.url())).unwrap();

        let mock = server
            .mock("GET", "/getCardVersions")
            .match_query(Matcher::UrlEncoded("lang".into(), "en".into()))
            .with_status(200)
            .with_body(r#"{"data": [], "generated": 1}"#)
            .create();

        let value = client.request("/getCardVersions", &[("lang", "en")]).unwrap();
        mock.assert();
        assert_eq!(value["generated"], 1);
    }

    #[test]
    fn test_blocking_timeout() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let timeout = Duration::from_millis(300);
        let config = ClientConfig::new(format!("http://{addr}")).with_timeout(timeout);
        let client = BlockingClient::new(config).unwrap();

        let started = Instant::now();
        let err = client.get_totw().unwrap_err();
        let elapsed = started.elapsed();

        assert_eq!(err.transport_kind(), Some(TransportErrorKind::Timeout));
        assert!(elapsed < timeout + Duration::from_secs(2), "took {elapsed:?}");
        drop(listener);
    }
}
