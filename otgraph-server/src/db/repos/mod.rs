//! Entity repositories.
//!
//! One module per aggregate. Each repository borrows the pool and exposes
//! the same capability shape: `get_by_id`, a (possibly filtered) listing,
//! and `create` where the entity supports it.

pub mod account_bans;
pub mod account_storage;
pub mod accounts;
pub mod guilds;
pub mod houses;
pub mod market;
pub mod player_deaths;
pub mod player_storage;
pub mod players;
pub mod towns;

pub use account_bans::{AccountBan, AccountBanRepo, BanAccountInput};
pub use account_storage::{AccountStorage, AccountStorageRepo, VipEntry};
pub use accounts::{Account, AccountRepo, CreateAccountInput};
pub use guilds::{
    CreateGuildInput, Guild, GuildInvite, GuildMembership, GuildRank, GuildRepo, GuildWar,
    GuildWarKill,
};
pub use houses::{House, HouseRepo, PlaceBidInput};
pub use market::{CreateMarketOfferInput, MarketHistory, MarketOffer, MarketRepo};
pub use player_deaths::{PlayerDeath, PlayerDeathRepo};
pub use player_storage::{PlayerStorage, PlayerStorageRepo};
pub use players::{CreatePlayerInput, Player, PlayerRepo};
pub use towns::{CreateTownInput, Town, TownRepo};
