use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::facade::StatsFacade;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let response = StatsFacade::admin_statistics(&mut pool, cfg)?;
        let s = &response.statistics;

        header(format!("Organization overview ({})", response.date));

        println!(
            "{}• Users:{} {} ({} employees, {} managers, {} admins)",
            CYAN, RESET, s.total_users, s.employees, s.managers, s.admins
        );
        println!(
            "{}• Teams:{} {} ({} without timetable, avg size {:.2})",
            CYAN, RESET, s.total_teams, s.teams_without_timetable, s.avg_team_size
        );
        println!(
            "{}• Today:{} {} punches recorded, {}{} currently present{}",
            CYAN, RESET, s.today_recordings, GREEN, s.currently_present, RESET
        );
        println!(
            "{}• Managers:{} {}{} active{} / {}{} inactive{} (rule: {})",
            CYAN,
            RESET,
            GREEN,
            s.active_managers,
            RESET,
            RED,
            s.inactive_managers,
            RESET,
            cfg.manager_rule().as_config_str()
        );
        println!();
    }
    Ok(())
}
