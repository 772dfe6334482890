//! Read-side dispatch. One repository call per query.

use crate::db::repos::{
    Account, AccountRepo, Guild, GuildRepo, GuildWar, GuildWarKill, House, HouseRepo,
    MarketHistory, MarketOffer, MarketRepo, Player, PlayerRepo, Town, TownRepo,
};

use super::{parse_id, GraphResult, Resolver};

/// Default cap on the account listing when the caller doesn't supply one.
const DEFAULT_ACCOUNT_LIMIT: i32 = 100;

impl Resolver {
    pub async fn account(&self, id: &str) -> GraphResult<Account> {
        let id = parse_id("account", id)?;
        Ok(AccountRepo::new(self.pool()).get_by_id(id).await?)
    }

    pub async fn accounts(&self, limit: Option<i32>) -> GraphResult<Vec<Account>> {
        let limit = limit.unwrap_or(DEFAULT_ACCOUNT_LIMIT);
        Ok(AccountRepo::new(self.pool()).get_all(limit).await?)
    }

    pub async fn player(&self, id: &str) -> GraphResult<Player> {
        let id = parse_id("player", id)?;
        Ok(PlayerRepo::new(self.pool()).get_by_id(id).await?)
    }

    /// Players on one account.
    pub async fn players(&self, account_id: &str) -> GraphResult<Vec<Player>> {
        let account_id = parse_id("account", account_id)?;
        Ok(PlayerRepo::new(self.pool())
            .get_by_account_id(account_id)
            .await?)
    }

    pub async fn town(&self, id: &str) -> GraphResult<Town> {
        let id = parse_id("town", id)?;
        Ok(TownRepo::new(self.pool()).get_by_id(id).await?)
    }

    pub async fn towns(&self) -> GraphResult<Vec<Town>> {
        Ok(TownRepo::new(self.pool()).get_all().await?)
    }

    pub async fn guild(&self, id: &str) -> GraphResult<Guild> {
        let id = parse_id("guild", id)?;
        Ok(GuildRepo::new(self.pool()).get_by_id(id).await?)
    }

    pub async fn guilds(&self) -> GraphResult<Vec<Guild>> {
        Ok(GuildRepo::new(self.pool()).get_all().await?)
    }

    pub async fn guild_wars(&self, guild_id: Option<&str>) -> GraphResult<Vec<GuildWar>> {
        let guild_id = match guild_id {
            Some(raw) => Some(parse_id("guild", raw)?),
            None => None,
        };
        Ok(GuildRepo::new(self.pool()).wars(guild_id).await?)
    }

    pub async fn guild_war_kills(&self, war_id: &str) -> GraphResult<Vec<GuildWarKill>> {
        let war_id = parse_id("guild war", war_id)?;
        Ok(GuildRepo::new(self.pool()).war_kills(war_id).await?)
    }

    pub async fn house(&self, id: &str) -> GraphResult<House> {
        let id = parse_id("house", id)?;
        Ok(HouseRepo::new(self.pool()).get_by_id(id).await?)
    }

    /// Houses, optionally restricted to one town.
    pub async fn houses(&self, town_id: Option<&str>) -> GraphResult<Vec<House>> {
        let town_id = match town_id {
            Some(raw) => Some(parse_id("town", raw)?),
            None => None,
        };
        Ok(HouseRepo::new(self.pool()).get_by_town_id(town_id).await?)
    }

    /// Open offers: by item type, or the most recent overall (capped).
    pub async fn market_offers(&self, item_type: Option<i32>) -> GraphResult<Vec<MarketOffer>> {
        Ok(MarketRepo::new(self.pool()).offers(item_type).await?)
    }

    pub async fn market_history(&self, player_id: &str) -> GraphResult<Vec<MarketHistory>> {
        let player_id = parse_id("player", player_id)?;
        Ok(MarketRepo::new(self.pool()).history(player_id).await?)
    }
}
