//! Guild repository: guilds, ranks, membership, invites, wars.
//!
//! Invite acceptance is the one multi-statement workflow in the system and
//! runs inside a transaction: rank lookup, membership insert and invite
//! delete either all take effect or none do.

use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::db::error::{DbError, DbResult};

/// Guild record from the `guilds` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Guild {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "ownerid")]
    pub owner_id: i32,
    #[sqlx(rename = "creationdata")]
    pub creation_data: i32,
    pub motd: String,
}

/// Rank within a guild; a higher `level` is more senior.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuildRank {
    pub id: i32,
    pub guild_id: i32,
    pub name: String,
    pub level: i32,
}

/// A player's guild membership; at most one row per player.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuildMembership {
    pub player_id: i32,
    pub guild_id: i32,
    pub rank_id: i32,
    pub nick: String,
}

/// Pending invite; deleted exactly once, on acceptance.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuildInvite {
    pub player_id: i32,
    pub guild_id: i32,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuildWar {
    pub id: i32,
    pub guild1: i32,
    pub guild2: i32,
    pub name1: String,
    pub name2: String,
    pub status: i32,
    pub started: i64,
    pub ended: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GuildWarKill {
    pub id: i32,
    pub killer: String,
    pub target: String,
    #[sqlx(rename = "killerguild")]
    pub killer_guild: i32,
    #[sqlx(rename = "targetguild")]
    pub target_guild: i32,
    #[sqlx(rename = "warid")]
    pub war_id: i32,
    pub time: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateGuildInput {
    pub name: String,
    pub owner_id: i32,
}

/// Guild repository.
pub struct GuildRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> GuildRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: i32) -> DbResult<Guild> {
        sqlx::query_as::<_, Guild>(
            "SELECT id, name, ownerid, creationdata, motd FROM guilds WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("get guild", e))?
        .ok_or_else(|| DbError::not_found("guild", id))
    }

    pub async fn get_all(&self) -> DbResult<Vec<Guild>> {
        sqlx::query_as::<_, Guild>("SELECT id, name, ownerid, creationdata, motd FROM guilds")
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list guilds", e))
    }

    pub async fn create(&self, input: CreateGuildInput) -> DbResult<Guild> {
        let result = sqlx::query(
            "INSERT INTO guilds (name, ownerid, creationdata) VALUES (?, ?, UNIX_TIMESTAMP())",
        )
        .bind(&input.name)
        .bind(input.owner_id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("create guild", e))?;

        self.get_by_id(result.last_insert_id() as i32).await
    }

    /// Ranks for a guild, most senior first.
    pub async fn ranks(&self, guild_id: i32) -> DbResult<Vec<GuildRank>> {
        sqlx::query_as::<_, GuildRank>(
            "SELECT id, guild_id, name, level FROM guild_ranks \
             WHERE guild_id = ? ORDER BY level DESC",
        )
        .bind(guild_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list guild ranks", e))
    }

    pub async fn members(&self, guild_id: i32) -> DbResult<Vec<GuildMembership>> {
        sqlx::query_as::<_, GuildMembership>(
            "SELECT player_id, guild_id, rank_id, nick FROM guild_membership WHERE guild_id = ?",
        )
        .bind(guild_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list guild members", e))
    }

    /// A player's membership, if any. Absence is a normal state here, not
    /// an error: a player may simply be unaffiliated.
    pub async fn membership_for_player(&self, player_id: i32) -> DbResult<Option<GuildMembership>> {
        sqlx::query_as::<_, GuildMembership>(
            "SELECT player_id, guild_id, rank_id, nick FROM guild_membership WHERE player_id = ?",
        )
        .bind(player_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("get guild membership", e))
    }

    /// Record a pending invite. Duplicate membership is guarded only by the
    /// schema's uniqueness constraint on `guild_membership.player_id`.
    pub async fn invite_player(&self, guild_id: i32, player_id: i32) -> DbResult<GuildInvite> {
        sqlx::query("INSERT INTO guild_invites (player_id, guild_id) VALUES (?, ?)")
            .bind(player_id)
            .bind(guild_id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("invite player", e))?;

        Ok(GuildInvite {
            player_id,
            guild_id,
        })
    }

    /// Accept a pending invite: bind the player to the guild's entry rank
    /// (level 1) and clear the invite, atomically.
    ///
    /// If the guild has no level-1 rank, nothing is written and the rank is
    /// reported as not found. The transaction rolls back on every early
    /// return (dropped uncommitted).
    pub async fn accept_invite(&self, guild_id: i32, player_id: i32) -> DbResult<GuildMembership> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::from_sqlx("accept invite", e))?;

        let rank: Option<(i32,)> = sqlx::query_as(
            "SELECT id FROM guild_ranks WHERE guild_id = ? AND level = 1 LIMIT 1",
        )
        .bind(guild_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DbError::from_sqlx("accept invite: get entry rank", e))?;

        let rank_id = rank
            .map(|(id,)| id)
            .ok_or_else(|| DbError::not_found("guild entry rank", guild_id))?;

        sqlx::query("INSERT INTO guild_membership (player_id, guild_id, rank_id) VALUES (?, ?, ?)")
            .bind(player_id)
            .bind(guild_id)
            .bind(rank_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_sqlx("accept invite: add member", e))?;

        sqlx::query("DELETE FROM guild_invites WHERE player_id = ? AND guild_id = ?")
            .bind(player_id)
            .bind(guild_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::from_sqlx("accept invite: remove invite", e))?;

        let membership: GuildMembership = sqlx::query_as(
            "SELECT player_id, guild_id, rank_id, nick FROM guild_membership WHERE player_id = ?",
        )
        .bind(player_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_sqlx("accept invite: reread membership", e))?;

        tx.commit()
            .await
            .map_err(|e| DbError::from_sqlx("accept invite", e))?;

        Ok(membership)
    }

    /// Wars involving a guild (either side), or all wars when no guild is
    /// given.
    pub async fn wars(&self, guild_id: Option<i32>) -> DbResult<Vec<GuildWar>> {
        match guild_id {
            Some(guild_id) => sqlx::query_as::<_, GuildWar>(
                "SELECT id, guild1, guild2, name1, name2, status, started, ended \
                 FROM guild_wars WHERE guild1 = ? OR guild2 = ?",
            )
            .bind(guild_id)
            .bind(guild_id)
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list guild wars", e)),
            None => sqlx::query_as::<_, GuildWar>(
                "SELECT id, guild1, guild2, name1, name2, status, started, ended FROM guild_wars",
            )
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::from_sqlx("list guild wars", e)),
        }
    }

    pub async fn war_kills(&self, war_id: i32) -> DbResult<Vec<GuildWarKill>> {
        sqlx::query_as::<_, GuildWarKill>(
            "SELECT id, killer, target, killerguild, targetguild, warid, time \
             FROM guildwar_kills WHERE warid = ? ORDER BY time DESC",
        )
        .bind(war_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::from_sqlx("list war kills", e))
    }
}
