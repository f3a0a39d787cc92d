//! Unofficial client for the FUTBIN player price API.
//!
//! [`FutbinClient`] is the async client; every FUTBIN operation lives on the
//! [`Client`] trait. [`BlockingClient`] offers the same operations for
//! synchronous callers.
//!
//! ```no_run
//! use futbin::{Client, ClientConfig, FutbinClient, Platform};
//!
//! # async fn run() -> Result<(), futbin::Error> {
//! let client = FutbinClient::new(ClientConfig::default().with_timeout_secs(10))?;
//! let price = client.get_player_price(21610, Platform::Ps).await?;
//! println!("{} coins", price.price);
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod blocking;
pub mod client;
pub mod config;
mod de;
pub mod error;
pub mod nations;
pub mod search;
pub mod types;
pub mod user_agent;

pub use api_client::FutbinClient;
pub use blocking::BlockingClient;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{ConfigError, Error, MappingError, TransportError, TransportErrorKind};
pub use nations::{get_nation_id, get_nation_name, NATIONS};
pub use search::PlayerSearchOptions;
pub use types::{
    CardVersion, CardVersionInfo, Club, Foot, FullPlayer, League, Platform, PlayerPrice,
    PopularPlayer, Position, SortOrder, WorkRate,
};
