use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::de;

/// Platform a price is quoted for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "PS")]
    Ps,
    #[serde(rename = "PC")]
    Pc,
    /// Xbox shares the PlayStation market.
    #[serde(rename = "XB")]
    Xbox,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ps => "PS",
            Platform::Pc => "PC",
            Platform::Xbox => "XB",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown platform {0:?}, expected PS, PC or XB")]
pub struct ParsePlatformError(String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PS" => Ok(Platform::Ps),
            "PC" => Ok(Platform::Pc),
            "XB" | "XBOX" => Ok(Platform::Xbox),
            _ => Err(ParsePlatformError(s.into())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Gk,
    #[serde(rename = "RB")]
    Rb,
    #[serde(rename = "RWB")]
    Rwb,
    #[serde(rename = "CB")]
    Cb,
    #[serde(rename = "LB")]
    Lb,
    #[serde(rename = "LWB")]
    Lwb,
    #[serde(rename = "CDM")]
    Cdm,
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "CAM")]
    Cam,
    #[serde(rename = "RM")]
    Rm,
    #[serde(rename = "LM")]
    Lm,
    #[serde(rename = "RW")]
    Rw,
    #[serde(rename = "LW")]
    Lw,
    #[serde(rename = "CF")]
    Cf,
    #[serde(rename = "ST")]
    St,
    /// A position code this crate does not know (raw upstream value).
    #[serde(untagged)]
    Unknown(String),
}

impl Position {
    pub const ALL: [Position; 15] = [
        Position::Gk,
        Position::Rb,
        Position::Rwb,
        Position::Cb,
        Position::Lb,
        Position::Lwb,
        Position::Cdm,
        Position::Cm,
        Position::Cam,
        Position::Rm,
        Position::Lm,
        Position::Rw,
        Position::Lw,
        Position::Cf,
        Position::St,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Position::Gk => "GK",
            Position::Rb => "RB",
            Position::Rwb => "RWB",
            Position::Cb => "CB",
            Position::Lb => "LB",
            Position::Lwb => "LWB",
            Position::Cdm => "CDM",
            Position::Cm => "CM",
            Position::Cam => "CAM",
            Position::Rm => "RM",
            Position::Lm => "LM",
            Position::Rw => "RW",
            Position::Lw => "LW",
            Position::Cf => "CF",
            Position::St => "ST",
            Position::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .unwrap_or_else(|| Position::Unknown(s.into()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foot {
    Left,
    Right,
    #[serde(untagged)]
    Unknown(String),
}

impl Foot {
    pub fn as_str(&self) -> &str {
        match self {
            Foot::Left => "Left",
            Foot::Right => "Right",
            Foot::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkRate {
    High,
    Med,
    Low,
    #[serde(untagged)]
    Unknown(String),
}

impl WorkRate {
    pub fn as_str(&self) -> &str {
        match self {
            WorkRate::High => "High",
            WorkRate::Med => "Med",
            WorkRate::Low => "Low",
            WorkRate::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for WorkRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Card category derived from a card version key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVersion {
    Gold,
    Silver,
    Bronze,
    Rare,
    NonRare,
    Totw,
    Toty,
    Tots,
    Icon,
    Hero,
    #[serde(untagged)]
    Unknown(String),
}

impl From<&str> for CardVersion {
    fn from(key: &str) -> Self {
        match key {
            "gold" => CardVersion::Gold,
            "silver" => CardVersion::Silver,
            "bronze" => CardVersion::Bronze,
            "rare" => CardVersion::Rare,
            "non_rare" => CardVersion::NonRare,
            "totw" => CardVersion::Totw,
            "toty" => CardVersion::Toty,
            "tots" => CardVersion::Tots,
            "icon" => CardVersion::Icon,
            "hero" => CardVersion::Hero,
            other => CardVersion::Unknown(other.into()),
        }
    }
}

/// Implements serde for a record whose derive is `remote = "Self"`: fields
/// that FUTBIN sends under a second key are resolved first, so a payload
/// carrying both keys still decodes.
macro_rules! fallback_keys {
    ($ty:ty { $($key:literal <- $fallback:literal),* $(,)? }) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let object = de::object_with_fallbacks(deserializer, &[$(($key, $fallback)),*])?;
                <$ty>::deserialize(object).map_err(serde::de::Error::custom)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                <$ty>::serialize(self, serializer)
            }
        }
    };
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct PlayerPrice {
    #[serde(rename = "LCPrice", default, deserialize_with = "de::u64")]
    pub price: u64,
    #[serde(rename = "MinPrice", default, deserialize_with = "de::u64")]
    pub min_price: u64,
    #[serde(rename = "MaxPrice", default, deserialize_with = "de::u64")]
    pub max_price: u64,
    #[serde(default, deserialize_with = "de::string")]
    pub updated: String,
    /// Not part of the payload; set from the request.
    #[serde(skip_deserializing)]
    pub platform: Platform,
}

impl PlayerPrice {
    /// The price reported for a player the upstream returned nothing for.
    pub fn empty(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.price == 0 && self.min_price == 0 && self.max_price == 0
    }
}

fallback_keys!(PlayerPrice { "LCPrice" <- "price" });

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularPlayer {
    #[serde(rename = "ID", default, deserialize_with = "de::u64")]
    pub futbin_id: u64,
    #[serde(default, deserialize_with = "de::u64")]
    pub resource_id: u64,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::u32")]
    pub rating: u32,
    #[serde(rename = "ps_LCPrice", default, deserialize_with = "de::u64")]
    pub price_ps: u64,
    #[serde(rename = "pc_LCPrice", default, deserialize_with = "de::u64")]
    pub price_pc: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct FullPlayer {
    #[serde(rename = "ID", default, deserialize_with = "de::u64")]
    pub futbin_id: u64,
    #[serde(default, deserialize_with = "de::u64")]
    pub resource_id: u64,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub common_name: String,
    #[serde(default, deserialize_with = "de::u32")]
    pub rating: u32,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub position: Option<Position>,

    #[serde(default, deserialize_with = "de::string")]
    pub club: String,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub club_id: Option<u32>,
    #[serde(default, deserialize_with = "de::string")]
    pub league: String,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub league_id: Option<u32>,
    #[serde(default, deserialize_with = "de::string")]
    pub nation: String,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub nation_id: Option<u32>,
    #[serde(default, deserialize_with = "de::string")]
    pub version: String,

    #[serde(default, deserialize_with = "de::u32")]
    pub age: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub height: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub weight: u32,
    #[serde(default, deserialize_with = "de::non_empty")]
    pub foot: Option<Foot>,
    #[serde(rename = "skills", default, deserialize_with = "de::u32")]
    pub skill_moves: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub weak_foot: u32,
    #[serde(rename = "att_workrate", default, deserialize_with = "de::non_empty")]
    pub att_work_rate: Option<WorkRate>,
    #[serde(rename = "def_workrate", default, deserialize_with = "de::non_empty")]
    pub def_work_rate: Option<WorkRate>,

    #[serde(rename = "pac", default, deserialize_with = "de::u32")]
    pub pace: u32,
    #[serde(rename = "sho", default, deserialize_with = "de::u32")]
    pub shooting: u32,
    #[serde(rename = "pas", default, deserialize_with = "de::u32")]
    pub passing: u32,
    #[serde(rename = "dri", default, deserialize_with = "de::u32")]
    pub dribbling: u32,
    #[serde(rename = "def", default, deserialize_with = "de::u32")]
    pub defending: u32,
    #[serde(rename = "phy", default, deserialize_with = "de::u32")]
    pub physical: u32,

    // pace
    #[serde(default, deserialize_with = "de::u32")]
    pub acceleration: u32,
    #[serde(rename = "sprintspeed", default, deserialize_with = "de::u32")]
    pub sprint_speed: u32,
    // shooting
    #[serde(default, deserialize_with = "de::u32")]
    pub positioning: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub finishing: u32,
    #[serde(rename = "shotpower", default, deserialize_with = "de::u32")]
    pub shot_power: u32,
    #[serde(rename = "longshots", default, deserialize_with = "de::u32")]
    pub long_shots: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub volleys: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub penalties: u32,
    // passing
    #[serde(default, deserialize_with = "de::u32")]
    pub vision: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub crossing: u32,
    #[serde(rename = "freekickaccuracy", default, deserialize_with = "de::u32")]
    pub free_kick_accuracy: u32,
    #[serde(rename = "shortpassing", default, deserialize_with = "de::u32")]
    pub short_passing: u32,
    #[serde(rename = "longpassing", default, deserialize_with = "de::u32")]
    pub long_passing: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub curve: u32,
    // dribbling
    #[serde(default, deserialize_with = "de::u32")]
    pub agility: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub balance: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub reactions: u32,
    #[serde(rename = "ballcontrol", default, deserialize_with = "de::u32")]
    pub ball_control: u32,
    #[serde(rename = "dribblingskill", default, deserialize_with = "de::u32")]
    pub dribbling_skill: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub composure: u32,
    // defending
    #[serde(default, deserialize_with = "de::u32")]
    pub interceptions: u32,
    #[serde(rename = "headingaccuracy", default, deserialize_with = "de::u32")]
    pub heading_accuracy: u32,
    #[serde(rename = "defawareness", default, deserialize_with = "de::u32")]
    pub def_awareness: u32,
    #[serde(rename = "standingtackle", default, deserialize_with = "de::u32")]
    pub standing_tackle: u32,
    #[serde(rename = "slidingtackle", default, deserialize_with = "de::u32")]
    pub sliding_tackle: u32,
    // physical
    #[serde(default, deserialize_with = "de::u32")]
    pub jumping: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub stamina: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub strength: u32,
    #[serde(default, deserialize_with = "de::u32")]
    pub aggression: u32,

    #[serde(rename = "ps_LCPrice", default, deserialize_with = "de::u64")]
    pub price_ps: u64,
    #[serde(rename = "pc_LCPrice", default, deserialize_with = "de::u64")]
    pub price_pc: u64,
}

impl FullPlayer {
    /// Display name: the common name when FUTBIN has one.
    pub fn display_name(&self) -> &str {
        if self.common_name.is_empty() {
            &self.name
        } else {
            &self.common_name
        }
    }

    pub fn price(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Ps | Platform::Xbox => self.price_ps,
            Platform::Pc => self.price_pc,
        }
    }
}

fallback_keys!(FullPlayer {
    "name" <- "playername",
    "version" <- "rare_type",
    "pac" <- "pace",
    "sho" <- "shooting",
    "pas" <- "passing",
    "dri" <- "dribbling",
    "def" <- "defending",
    "phy" <- "physical",
    "defawareness" <- "marking",
});

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Club {
    #[serde(rename = "id", default, deserialize_with = "de::u32")]
    pub club_id: u32,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
}

fallback_keys!(Club { "id" <- "club_id" });

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct League {
    #[serde(rename = "id", default, deserialize_with = "de::u32")]
    pub league_id: u32,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::or_default")]
    pub clubs: Vec<Club>,
}

fallback_keys!(League { "id" <- "league_id" });

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardVersionInfo {
    #[serde(default, deserialize_with = "de::string")]
    pub key: String,
    #[serde(default, deserialize_with = "de::string")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string")]
    pub img: String,
}

impl CardVersionInfo {
    pub fn category(&self) -> CardVersion {
        CardVersion::from(self.key.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_platform_wire_values() {
        assert_eq!(Platform::Xbox.as_str(), "XB");
        assert_eq!(serde_json::to_string(&Platform::Pc).unwrap(), "\"PC\"");
        assert_eq!("xbox".parse::<Platform>(), Ok(Platform::Xbox));
        assert_eq!("XB".parse::<Platform>(), Ok(Platform::Xbox));
        assert!("switch".parse::<Platform>().is_err());
    }

    #[test]
    fn test_enums_are_case_sensitive_and_keep_unknown_values() {
        let pos: Position = serde_json::from_str("\"CAM\"").unwrap();
        assert_eq!(pos, Position::Cam);
        let pos: Position = serde_json::from_str("\"cam\"").unwrap();
        assert_eq!(pos, Position::Unknown("cam".into()));

        let foot: Foot = serde_json::from_str("\"Left\"").unwrap();
        assert_eq!(foot, Foot::Left);
        let foot: Foot = serde_json::from_str("\"Both\"").unwrap();
        assert_eq!(foot, Foot::Unknown("Both".into()));

        assert_eq!(Position::from("ST"), Position::St);
        assert_eq!(Position::from("SW").as_str(), "SW");
    }

    #[test]
    fn test_card_version_category() {
        let info = CardVersionInfo {
            key: "totw".into(),
            name: "Team of the Week".into(),
            img: "totw_gold".into(),
        };
        assert_eq!(info.category(), CardVersion::Totw);
        assert_eq!(
            CardVersion::from("fut_birthday"),
            CardVersion::Unknown("fut_birthday".into())
        );
    }

    #[test]
    fn test_full_player_price_per_platform() {
        let player = FullPlayer {
            price_ps: 15000,
            price_pc: 21000,
            ..Default::default()
        };
        assert_eq!(player.price(Platform::Ps), 15000);
        assert_eq!(player.price(Platform::Xbox), 15000);
        assert_eq!(player.price(Platform::Pc), 21000);
    }

    #[test]
    fn test_full_player_tolerates_nulls_and_missing_fields() {
        let player: FullPlayer = serde_json::from_str(
            r#"{"ID": "231", "name": null, "position": "", "foot": null, "club_id": null, "extra": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(player.futbin_id, 231);
        assert_eq!(player.name, "");
        assert_eq!(player.position, None);
        assert_eq!(player.foot, None);
        assert_eq!(player.club_id, None);
        assert_eq!(player.pace, 0);
        assert_eq!(player.display_name(), "");
    }

    #[test]
    fn test_short_and_long_keys_together_decode() {
        let player: FullPlayer = serde_json::from_str(
            r#"{"ID": 1, "pac": 90, "pace": 85, "rare_type": "1", "version": "gold",
                "playername": "Kylian Mbappé", "physical": 77, "marking": 40}"#,
        )
        .unwrap();
        assert_eq!(player.pace, 90);
        assert_eq!(player.version, "gold");
        assert_eq!(player.name, "Kylian Mbappé");
        assert_eq!(player.physical, 77);
        assert_eq!(player.def_awareness, 40);

        let price: PlayerPrice =
            serde_json::from_str(r#"{"LCPrice": "1,000", "price": "1,200"}"#).unwrap();
        assert_eq!(price.price, 1000);
        let price: PlayerPrice = serde_json::from_str(r#"{"price": "1,200"}"#).unwrap();
        assert_eq!(price.price, 1200);

        let league: League = serde_json::from_str(
            r#"{"id": 13, "league_id": 13, "clubs": [{"id": 1, "club_id": 1, "name": "Arsenal"}]}"#,
        )
        .unwrap();
        assert_eq!(league.league_id, 13);
        assert_eq!(league.clubs[0].club_id, 1);
    }

    #[test]
    fn test_records_serialize_with_wire_keys() {
        let value = serde_json::to_value(Club {
            club_id: 1,
            name: "Arsenal".into(),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "name": "Arsenal"}));
    }

    #[test]
    fn test_league_with_null_clubs() {
        let league: League =
            serde_json::from_str(r#"{"id": 13, "name": "Premier League", "clubs": null}"#).unwrap();
        assert_eq!(league.league_id, 13);
        assert!(league.clubs.is_empty());
    }
}
