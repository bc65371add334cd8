use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::punctuality_label;
use crate::core::facade::StatsFacade;
use crate::core::range::resolve_range;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::statistics::TeamStatsResponse;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::paint_rate_label;
use crate::utils::table::Table;
use crate::utils::time::format_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Team { id, range, members } = cmd {
        let bounds = resolve_range(range)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let response = StatsFacade::team_statistics(&mut pool, cfg, *id, bounds)?;

        print_team_stats(&response);

        if *members {
            print_members(&response, cfg);
        }
    }
    Ok(())
}

fn print_team_stats(response: &TeamStatsResponse) {
    let manager = response
        .manager
        .as_ref()
        .map(|m| m.name.clone())
        .unwrap_or_else(|| "--".to_string());

    let period = match (response.period.start, response.period.end) {
        (Some(s), Some(e)) => format!("{} → {}", s, e),
        _ => "all".to_string(),
    };

    println!();
    println!(
        "👥 {} (#{}) | manager: {} | period: {}",
        response.team.name, response.team.id, manager, period
    );

    match &response.team.schedule {
        Some(s) => println!(
            "{}   shift {} → {}{}",
            GREY,
            format_time(s.shift_start),
            format_time(s.shift_end),
            RESET
        ),
        None => println!(
            "{}   (no timetable assigned: punctuality omitted){}",
            GREY, RESET
        ),
    }

    let agg = &response.aggregated;
    println!();
    println!("{}• Members:{}          {}", CYAN, RESET, agg.total_members);
    println!("{}• Total hours:{}      {:.2}", CYAN, RESET, agg.total_hours);
    println!(
        "{}• Avg days worked:{}  {:.2}",
        CYAN, RESET, agg.average_days_worked
    );
    println!(
        "{}• Avg hours/day:{}    {:.2}",
        CYAN, RESET, agg.average_hours_per_day
    );
    println!();
}

fn print_members(response: &TeamStatsResponse, cfg: &Config) {
    if response.statistics.is_empty() {
        println!("Team has no members.");
        return;
    }

    let mut table = Table::new(vec!["Id", "Member", "Hours", "Days", "Avg/day", "Punctuality"]);

    for stats in &response.statistics {
        let punctuality = match stats.punctuality_rate {
            Some(rate) => format!(
                "{}% {}",
                rate,
                paint_rate_label(rate, punctuality_label(rate))
            ),
            None => format!("{}--{}", GREY, RESET),
        };

        table.add_row(vec![
            stats.user.id.to_string(),
            stats.user.name.clone(),
            format!("{:.2}", stats.total_hours),
            stats.total_days.to_string(),
            format!("{:.2}", stats.average_hours_per_day),
            punctuality,
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));
}
