use clap::Parser;
use tracing::info;

use futbin::{
    get_nation_id, get_nation_name, Client, ClientConfig, Foot, FullPlayer, FutbinClient,
    Platform, PlayerPrice, PlayerSearchOptions, Position,
};

#[derive(Parser, Debug)]
#[command(name = "futbin", version, about = "Query FUTBIN player prices and reference data")]
pub enum Cmd {
    /// Price of a player by FUTBIN id
    Price {
        player_id: u64,
        #[arg(short, long, default_value = "PS")]
        platform: Platform,
    },
    /// Price of a player by EA resource id
    ResourcePrice {
        resource_id: u64,
        #[arg(short, long, default_value = "PS")]
        platform: Platform,
    },
    /// Prices of several players in one request
    Prices {
        #[arg(required = true)]
        player_ids: Vec<u64>,
        #[arg(short, long, default_value = "PS")]
        platform: Platform,
    },
    /// Players most viewed on FUTBIN right now
    Popular,
    /// Search players with filters
    Search {
        #[arg(short, long)]
        platform: Option<Platform>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        rating_min: Option<u32>,
        #[arg(long)]
        rating_max: Option<u32>,
        #[arg(long)]
        price_min: Option<u64>,
        #[arg(long)]
        price_max: Option<u64>,
        /// Comma-separated, e.g. ST,CF
        #[arg(long, value_delimiter = ',')]
        position: Vec<String>,
        #[arg(long)]
        nation: Option<u32>,
        #[arg(long)]
        league: Option<u32>,
        #[arg(long)]
        club: Option<u32>,
        /// Card version key, e.g. totw
        #[arg(long)]
        version: Option<String>,
        /// Left or Right
        #[arg(long)]
        foot: Option<String>,
    },
    /// Team of the Week
    Totw {
        #[arg(short, long, default_value = "PS")]
        platform: Platform,
    },
    /// Players most recently added to FUTBIN
    Latest {
        #[arg(short, long, default_value = "PS")]
        platform: Platform,
    },
    /// Leagues with their clubs
    Leagues,
    /// Card versions (Gold, TOTW, Icon, ...)
    Versions,
    /// Look up a nation by id or by name
    Nation { query: String },
}

/// 950 -> "950", 1_500 -> "1.5K", 2_300_000 -> "2.3M"
pub fn format_price(price: u64) -> String {
    if price >= 1_000_000 {
        format!("{:.1}M", price as f64 / 1_000_000.0)
    } else if price >= 1_000 {
        format!("{:.1}K", price as f64 / 1_000.0)
    } else {
        price.to_string()
    }
}

fn print_price(label: &str, price: &PlayerPrice) {
    println!("{label} ({})", price.platform);
    println!(" current | {}", format_price(price.price));
    println!(" min     | {}", format_price(price.min_price));
    println!(" max     | {}", format_price(price.max_price));
    if !price.updated.is_empty() {
        println!(" updated | {}", price.updated);
    }
}

fn print_players(players: &[FullPlayer], platform: Platform) {
    if players.is_empty() {
        println!("no players found");
        return;
    }
    println!("ID | Rating | Position | Price | Name | Club | Nation");
    for player in players {
        println!(
            " {} | {} | {} | {} | {} | {} | {}",
            player.futbin_id,
            player.rating,
            player.position.as_ref().map(Position::as_str).unwrap_or("-"),
            format_price(player.price(platform)),
            player.display_name(),
            if player.club.is_empty() { "-" } else { player.club.as_str() },
            if player.nation.is_empty() { "-" } else { player.nation.as_str() },
        );
    }
    println!("{} players", players.len());
}

fn foot(raw: &str) -> Foot {
    match raw.to_ascii_lowercase().as_str() {
        "left" => Foot::Left,
        "right" => Foot::Right,
        _ => Foot::Unknown(raw.into()),
    }
}

fn nation(query: &str) -> String {
    match query.parse::<u32>() {
        Ok(id) => match get_nation_name(id) {
            Some(name) => format!("{id} | {name}"),
            None => format!("no nation with id {id}"),
        },
        Err(_) => match get_nation_id(query) {
            Some(id) => format!("{id} | {query}"),
            None => format!("no nation named {query:?}"),
        },
    }
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = FutbinClient::new(ClientConfig::from_env()?)?;
        info!(base_url = %client.config().base_url, "querying futbin");

        match self {
            Cmd::Price {
                player_id,
                platform,
            } => {
                let price = client.get_player_price(player_id, platform).await?;
                print_price(&format!("player #{player_id}"), &price);
            }
            Cmd::ResourcePrice {
                resource_id,
                platform,
            } => {
                let price = client
                    .get_player_price_by_resource_id(resource_id, platform)
                    .await?;
                print_price(&format!("resource #{resource_id}"), &price);
            }
            Cmd::Prices {
                player_ids,
                platform,
            } => {
                let prices = client.get_players_prices(&player_ids, platform).await?;
                println!("ID | Price | Min | Max ({platform})");
                for id in &player_ids {
                    if let Some(price) = prices.get(id) {
                        println!(
                            " {} | {} | {} | {}",
                            id,
                            format_price(price.price),
                            format_price(price.min_price),
                            format_price(price.max_price)
                        );
                    }
                }
            }
            Cmd::Popular => {
                let players = client.get_popular_players().await?;
                println!("ID | Rating | PS | PC | Name");
                for player in &players {
                    println!(
                        " {} | {} | {} | {} | {}",
                        player.futbin_id,
                        player.rating,
                        format_price(player.price_ps),
                        format_price(player.price_pc),
                        player.name
                    );
                }
            }
            Cmd::Search {
                platform,
                page,
                rating_min,
                rating_max,
                price_min,
                price_max,
                position,
                nation,
                league,
                club,
                version,
                foot: foot_arg,
            } => {
                let options = PlayerSearchOptions {
                    platform,
                    page: Some(page),
                    min_rating: rating_min,
                    max_rating: rating_max,
                    min_price: price_min,
                    max_price: price_max,
                    position: (!position.is_empty())
                        .then(|| position.iter().map(|p| Position::from(p.as_str())).collect()),
                    nation_id: nation,
                    league_id: league,
                    club_id: club,
                    version,
                    foot: foot_arg.as_deref().map(foot),
                    ..Default::default()
                };
                let players = client.search_players(&options).await?;
                print_players(&players, platform.unwrap_or_default());
                println!("page {page}");
            }
            Cmd::Totw { platform } => {
                print_players(&client.get_totw().await?, platform);
            }
            Cmd::Latest { platform } => {
                print_players(&client.get_latest_players().await?, platform);
            }
            Cmd::Leagues => {
                let leagues = client.get_leagues_and_clubs().await?;
                println!("ID | Clubs | League");
                for league in &leagues {
                    println!(" {} | {} | {}", league.league_id, league.clubs.len(), league.name);
                }
            }
            Cmd::Versions => {
                let versions = client.get_card_versions().await?;
                println!("Key | Name | Image");
                for version in &versions {
                    println!(" {} | {} | {}", version.key, version.name, version.img);
                }
            }
            Cmd::Nation { query } => println!("{}", nation(&query)),
        }

        client.close();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(950), "950");
        assert_eq!(format_price(1_500), "1.5K");
        assert_eq!(format_price(2_300_000), "2.3M");
    }

    #[test]
    fn test_nation_lookup() {
        assert_eq!(nation("54"), "54 | Ethiopia");
        assert_eq!(nation("Brazil"), "22 | Brazil");
        assert_eq!(nation("9999"), "no nation with id 9999");
    }

    #[test]
    fn test_parse_search_args() {
        let cmd = Cmd::try_parse_from([
            "futbin", "search", "--platform", "pc", "--rating-min", "85", "--position", "ST,CF",
            "--foot", "left",
        ])
        .unwrap();
        match cmd {
            Cmd::Search {
                platform,
                rating_min,
                position,
                foot: foot_arg,
                page,
                ..
            } => {
                assert_eq!(platform, Some(Platform::Pc));
                assert_eq!(rating_min, Some(85));
                assert_eq!(position, vec!["ST", "CF"]);
                assert_eq!(foot_arg.as_deref().map(foot), Some(Foot::Left));
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_every_subcommand_has_help() {
        use clap::CommandFactory;

        let cmd = Cmd::command();
        for sub in cmd.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no help", sub.get_name());
        }
    }

    #[test]
    fn test_parse_prices_args() {
        let cmd = Cmd::try_parse_from(["futbin", "prices", "1", "2", "-p", "XB"]).unwrap();
        assert!(matches!(
            cmd,
            Cmd::Prices { ref player_ids, platform: Platform::Xbox } if player_ids == &[1, 2]
        ));
        assert!(Cmd::try_parse_from(["futbin", "prices"]).is_err());
    }
}
