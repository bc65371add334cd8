//! The query facade: the only entry point the outer layer (CLI here, an
//! HTTP service elsewhere) is supposed to call.
//!
//! Each operation fetches an immutable snapshot from the data source, then
//! runs the pure reconstruction/aggregation pipeline over it. Nothing is
//! cached and nothing is written: identical underlying data always yields
//! identical results.

use crate::config::Config;
use crate::core::aggregator::compute_user_statistics;
use crate::core::range::{period_of, DateRange};
use crate::core::reconstructor::reconstruct;
use crate::core::rollup::{aggregate_team, compute_admin_statistics};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::statistics::{AdminStatsResponse, TeamStatsResponse, UserStatistics};
use crate::utils::date;
use chrono::NaiveDate;

pub struct StatsFacade;

impl StatsFacade {
    /// Statistics for a single user over an optional date range.
    pub fn user_statistics(
        pool: &mut DbPool,
        cfg: &Config,
        user_id: i64,
        range: Option<DateRange>,
    ) -> AppResult<UserStatistics> {
        let user = queries::load_user(pool, user_id)?.ok_or(AppError::UnknownUser(user_id))?;

        // Punctuality needs the team's timetable; a user without a team (or
        // a team without one) simply gets no rate.
        let schedule = match user.team_id {
            Some(team_id) => queries::load_team(pool, team_id)?.and_then(|t| t.schedule),
            None => None,
        };

        let events = queries::load_events_for_user(pool, user_id, range.as_ref())?;
        let recon = reconstruct(&events, cfg.duplicate_policy());

        Ok(compute_user_statistics(
            &user,
            recon,
            schedule.as_ref(),
            cfg.grace_minutes,
        ))
    }

    /// Statistics for every member of a team plus the commutative aggregate.
    pub fn team_statistics(
        pool: &mut DbPool,
        cfg: &Config,
        team_id: i64,
        range: Option<DateRange>,
    ) -> AppResult<TeamStatsResponse> {
        let team = queries::load_team(pool, team_id)?.ok_or(AppError::UnknownTeam(team_id))?;

        let manager = match team.manager_id {
            Some(id) => queries::load_user(pool, id)?,
            None => None,
        };

        // Per-member computations are independent of each other; the fold
        // below is commutative, so any execution order gives the same
        // aggregate.
        let members = queries::team_members(pool, team_id)?;
        let mut statistics = Vec::with_capacity(members.len());
        for member in &members {
            let events = queries::load_events_for_user(pool, member.id, range.as_ref())?;
            let recon = reconstruct(&events, cfg.duplicate_policy());
            statistics.push(compute_user_statistics(
                member,
                recon,
                team.schedule.as_ref(),
                cfg.grace_minutes,
            ));
        }

        let aggregated = aggregate_team(&statistics);
        let period = period_of(range.as_ref());

        Ok(TeamStatsResponse {
            team,
            manager,
            statistics,
            aggregated,
            period,
        })
    }

    /// Organization-wide counters for the current UTC date.
    pub fn admin_statistics(pool: &mut DbPool, cfg: &Config) -> AppResult<AdminStatsResponse> {
        Self::admin_statistics_on(pool, cfg, date::today_utc())
    }

    /// Same as `admin_statistics` with an explicit reference date, so the
    /// "today" counters are testable.
    pub fn admin_statistics_on(
        pool: &mut DbPool,
        cfg: &Config,
        today: NaiveDate,
    ) -> AppResult<AdminStatsResponse> {
        let users = queries::load_users(pool)?;
        let teams = queries::load_teams(pool)?;
        let today_events = queries::load_events_on(pool, today)?;

        let statistics = compute_admin_statistics(
            &users,
            &teams,
            &today_events,
            today,
            cfg.manager_rule(),
        );

        Ok(AdminStatsResponse {
            date: today,
            statistics,
        })
    }
}
