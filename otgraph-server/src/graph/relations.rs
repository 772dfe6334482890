//! Relation resolvers: one related field per call, keyed off data already
//! on the parent entity. No second lookup ever "discovers" a foreign key,
//! and no relation is fetched eagerly alongside another.
//!
//! A missing target (a player whose account id points nowhere) surfaces as
//! `DbError::NotFound` through the repository, never as a zero-valued
//! stand-in entity.

use crate::db::repos::{
    Account, AccountBan, AccountBanRepo, AccountRepo, AccountStorage, AccountStorageRepo, Guild,
    GuildMembership, GuildRank, GuildRepo, Player, PlayerDeath, PlayerDeathRepo, PlayerRepo,
    PlayerStorage, PlayerStorageRepo, Town, TownRepo, VipEntry,
};

use super::{GraphResult, Resolver};

impl Resolver {
    // Player relations

    pub async fn player_town(&self, player: &Player) -> GraphResult<Town> {
        Ok(TownRepo::new(self.pool()).get_by_id(player.town_id).await?)
    }

    pub async fn player_account(&self, player: &Player) -> GraphResult<Account> {
        Ok(AccountRepo::new(self.pool())
            .get_by_id(player.account_id)
            .await?)
    }

    pub async fn player_deaths(&self, player: &Player) -> GraphResult<Vec<PlayerDeath>> {
        Ok(PlayerDeathRepo::new(self.pool())
            .get_by_player_id(player.id)
            .await?)
    }

    pub async fn player_storage(&self, player: &Player) -> GraphResult<Vec<PlayerStorage>> {
        Ok(PlayerStorageRepo::new(self.pool())
            .get_by_player_id(player.id)
            .await?)
    }

    /// A player's guild membership; `None` means unaffiliated.
    pub async fn player_guild_membership(
        &self,
        player: &Player,
    ) -> GraphResult<Option<GuildMembership>> {
        Ok(GuildRepo::new(self.pool())
            .membership_for_player(player.id)
            .await?)
    }

    // Account relations

    pub async fn account_players(&self, account: &Account) -> GraphResult<Vec<Player>> {
        Ok(PlayerRepo::new(self.pool())
            .get_by_account_id(account.id)
            .await?)
    }

    pub async fn account_bans(&self, account: &Account) -> GraphResult<Vec<AccountBan>> {
        Ok(AccountBanRepo::new(self.pool())
            .get_by_account_id(account.id)
            .await?)
    }

    pub async fn account_storage(&self, account: &Account) -> GraphResult<Vec<AccountStorage>> {
        Ok(AccountStorageRepo::new(self.pool())
            .get_by_account_id(account.id)
            .await?)
    }

    pub async fn account_vip_list(&self, account: &Account) -> GraphResult<Vec<VipEntry>> {
        Ok(AccountStorageRepo::new(self.pool())
            .vip_list(account.id)
            .await?)
    }

    // Guild relations

    pub async fn guild_owner(&self, guild: &Guild) -> GraphResult<Player> {
        Ok(PlayerRepo::new(self.pool())
            .get_by_id(guild.owner_id)
            .await?)
    }

    pub async fn guild_ranks(&self, guild: &Guild) -> GraphResult<Vec<GuildRank>> {
        Ok(GuildRepo::new(self.pool()).ranks(guild.id).await?)
    }

    pub async fn guild_members(&self, guild: &Guild) -> GraphResult<Vec<GuildMembership>> {
        Ok(GuildRepo::new(self.pool()).members(guild.id).await?)
    }
}
