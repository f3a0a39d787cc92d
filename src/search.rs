//! Filters for the `getFilteredPlayers` endpoint.
//!
//! Every field is optional. [`PlayerSearchOptions::to_params`] emits a query
//! parameter only for fields that are set, plus `page`, which defaults to 1.
//! Ranges are not validated; `min_x > max_x` is sent as-is and whatever the
//! upstream makes of it comes back in the response.

use std::collections::BTreeMap;

use crate::types::{Foot, Platform, Position, SortOrder, WorkRate};

pub const DEFAULT_PAGE: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerSearchOptions {
    pub platform: Option<Platform>,
    /// `None` is sent as page 1.
    pub page: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    pub name: Option<String>,

    pub min_rating: Option<u32>,
    pub max_rating: Option<u32>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_pace: Option<u32>,
    pub max_pace: Option<u32>,
    pub min_shooting: Option<u32>,
    pub max_shooting: Option<u32>,
    pub min_passing: Option<u32>,
    pub max_passing: Option<u32>,
    pub min_dribbling: Option<u32>,
    pub max_dribbling: Option<u32>,
    pub min_defending: Option<u32>,
    pub max_defending: Option<u32>,
    pub min_physical: Option<u32>,
    pub max_physical: Option<u32>,
    pub min_skill_moves: Option<u32>,
    pub max_skill_moves: Option<u32>,
    pub min_weak_foot: Option<u32>,
    pub max_weak_foot: Option<u32>,
    /// Centimetres.
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    /// Kilograms.
    pub min_weight: Option<u32>,
    pub max_weight: Option<u32>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_in_game_stats: Option<u32>,
    pub max_in_game_stats: Option<u32>,

    /// Sent comma-joined (`position=ST,CF`); empty means unset.
    pub position: Option<Vec<Position>>,
    pub nation_id: Option<u32>,
    pub league_id: Option<u32>,
    pub club_id: Option<u32>,
    /// Card version key, e.g. `totw` or `icon`.
    pub version: Option<String>,
    pub foot: Option<Foot>,
    pub att_work_rate: Option<WorkRate>,
    pub def_work_rate: Option<WorkRate>,
}

macro_rules! put {
    ($params:ident, $($key:literal => $value:expr),+ $(,)?) => {
        $(
            if let Some(value) = &$value {
                $params.insert($key, value.to_string());
            }
        )+
    };
}

impl PlayerSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_rating = min;
        self.max_rating = max;
        self
    }

    #[must_use]
    pub fn with_price(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.position = Some(positions.into_iter().collect());
        self
    }

    pub fn to_params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("page", self.page.unwrap_or(DEFAULT_PAGE).to_string());

        put!(params,
            "platform" => self.platform,
            "sort" => self.sort,
            "order" => self.order,
            "name" => self.name,
        );

        put!(params,
            "min_rating" => self.min_rating,
            "max_rating" => self.max_rating,
            "min_price" => self.min_price,
            "max_price" => self.max_price,
            "min_pace" => self.min_pace,
            "max_pace" => self.max_pace,
            "min_shooting" => self.min_shooting,
            "max_shooting" => self.max_shooting,
            "min_passing" => self.min_passing,
            "max_passing" => self.max_passing,
            "min_dribbling" => self.min_dribbling,
            "max_dribbling" => self.max_dribbling,
            "min_defending" => self.min_defending,
            "max_defending" => self.max_defending,
            "min_physical" => self.min_physical,
            "max_physical" => self.max_physical,
            "min_skills" => self.min_skill_moves,
            "max_skills" => self.max_skill_moves,
            "min_weak_foot" => self.min_weak_foot,
            "max_weak_foot" => self.max_weak_foot,
            "min_height" => self.min_height,
            "max_height" => self.max_height,
            "min_weight" => self.min_weight,
            "max_weight" => self.max_weight,
            "min_age" => self.min_age,
            "max_age" => self.max_age,
            "min_igs" => self.min_in_game_stats,
            "max_igs" => self.max_in_game_stats,
        );

        put!(params,
            "nation" => self.nation_id,
            "league" => self.league_id,
            "club" => self.club_id,
            "version" => self.version,
            "foot" => self.foot,
            "att_wr" => self.att_work_rate,
            "def_wr" => self.def_work_rate,
        );

        if let Some(positions) = self.position.as_deref().filter(|p| !p.is_empty()) {
            let joined = positions
                .iter()
                .map(Position::as_str)
                .collect::<Vec<_>>()
                .join(",");
            params.insert("position", joined);
        }

        params
    }
}
