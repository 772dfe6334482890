//! Write-side dispatch. One repository call per mutation; identifiers
//! arriving as opaque strings are converted before any storage access.

use crate::db::repos::{
    Account, AccountBan, AccountBanRepo, AccountRepo, BanAccountInput, CreateAccountInput,
    CreateGuildInput, CreateMarketOfferInput, CreatePlayerInput, CreateTownInput, Guild,
    GuildInvite, GuildMembership, GuildRepo, House, HouseRepo, MarketOffer, MarketRepo, Player,
    PlayerRepo, Town, TownRepo,
};

use super::{parse_id, GraphResult, Resolver};

impl Resolver {
    pub async fn create_account(&self, input: CreateAccountInput) -> GraphResult<Account> {
        Ok(AccountRepo::new(self.pool()).create(input).await?)
    }

    pub async fn create_player(&self, input: CreatePlayerInput) -> GraphResult<Player> {
        Ok(PlayerRepo::new(self.pool()).create(input).await?)
    }

    pub async fn create_town(&self, input: CreateTownInput) -> GraphResult<Town> {
        Ok(TownRepo::new(self.pool()).create(input).await?)
    }

    pub async fn create_guild(&self, input: CreateGuildInput) -> GraphResult<Guild> {
        Ok(GuildRepo::new(self.pool()).create(input).await?)
    }

    pub async fn ban_account(&self, input: BanAccountInput) -> GraphResult<AccountBan> {
        Ok(AccountBanRepo::new(self.pool()).create(input).await?)
    }

    pub async fn create_market_offer(
        &self,
        input: CreateMarketOfferInput,
    ) -> GraphResult<MarketOffer> {
        Ok(MarketRepo::new(self.pool()).create_offer(input).await?)
    }

    /// `Unaffiliated -> Invited`: record a pending invite.
    pub async fn invite_to_guild(&self, guild_id: &str, player_id: i32) -> GraphResult<GuildInvite> {
        let guild_id = parse_id("guild", guild_id)?;
        Ok(GuildRepo::new(self.pool())
            .invite_player(guild_id, player_id)
            .await?)
    }

    /// `Invited -> Member`: atomic rank lookup, membership insert, invite
    /// delete.
    pub async fn accept_guild_invite(
        &self,
        guild_id: &str,
        player_id: &str,
    ) -> GraphResult<GuildMembership> {
        let guild_id = parse_id("guild", guild_id)?;
        let player_id = parse_id("player", player_id)?;
        Ok(GuildRepo::new(self.pool())
            .accept_invite(guild_id, player_id)
            .await?)
    }

    /// Overwrite the house's current bid and return the re-read house.
    pub async fn place_house_bid(
        &self,
        house_id: &str,
        player_id: i32,
        amount: i32,
    ) -> GraphResult<House> {
        let house_id = parse_id("house", house_id)?;
        Ok(HouseRepo::new(self.pool())
            .place_bid(house_id, player_id, amount)
            .await?)
    }
}
