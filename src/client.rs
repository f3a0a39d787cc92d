use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Error;
use crate::search::PlayerSearchOptions;
use crate::types::{CardVersionInfo, FullPlayer, League, Platform, PlayerPrice, PopularPlayer};

/// The FUTBIN operations. Every call is exactly one upstream request.
#[async_trait]
pub trait Client {
    async fn get_player_price(&self, player_id: u64, platform: Platform)
        -> Result<PlayerPrice, Error>;

    async fn get_player_price_by_resource_id(
        &self,
        resource_id: u64,
        platform: Platform,
    ) -> Result<PlayerPrice, Error>;

    /// Keyed by exactly the given ids; ids the upstream left out map to
    /// [`PlayerPrice::empty`].
    async fn get_players_prices(
        &self,
        player_ids: &[u64],
        platform: Platform,
    ) -> Result<HashMap<u64, PlayerPrice>, Error>;

    async fn get_popular_players(&self) -> Result<Vec<PopularPlayer>, Error>;

    async fn search_players(&self, options: &PlayerSearchOptions) -> Result<Vec<FullPlayer>, Error>;

    /// Team of the Week. Empty between seasons.
    async fn get_totw(&self) -> Result<Vec<FullPlayer>, Error>;

    async fn get_latest_players(&self) -> Result<Vec<FullPlayer>, Error>;

    async fn get_leagues_and_clubs(&self) -> Result<Vec<League>, Error>;

    async fn get_card_versions(&self) -> Result<Vec<CardVersionInfo>, Error>;
}
