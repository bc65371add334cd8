use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::punctuality_label;
use crate::core::facade::StatsFacade;
use crate::core::range::resolve_range;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::statistics::UserStatistics;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::describe_role;
use crate::utils::formatting::paint_rate_label;
use crate::utils::hours2readable;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        id,
        range,
        sessions,
        anomalies,
    } = cmd
    {
        let bounds = resolve_range(range)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let stats = StatsFacade::user_statistics(&mut pool, cfg, *id, bounds)?;

        print_user_stats(&stats, range);

        if *sessions {
            print_sessions(&stats, cfg);
        }

        if *anomalies {
            print_anomalies(&stats);
        }
    }
    Ok(())
}

fn print_user_stats(stats: &UserStatistics, range: &Option<String>) {
    let period = range.as_deref().unwrap_or("all");

    let (role_label, role_color) = describe_role(stats.user.role.to_db_str());

    println!();
    println!(
        "👤 {} (#{}) | {}{}{} | period: {}",
        stats.user.name, stats.user.id, role_color, role_label, RESET, period
    );
    println!();
    println!(
        "{}• Total hours:{}    {} ({:.2})",
        CYAN,
        RESET,
        hours2readable(stats.total_hours, false),
        stats.total_hours
    );
    println!("{}• Days worked:{}    {}", CYAN, RESET, stats.total_days);
    println!(
        "{}• Avg hours/day:{}  {:.2}",
        CYAN, RESET, stats.average_hours_per_day
    );

    match stats.punctuality_rate {
        Some(rate) => {
            let label = punctuality_label(rate);
            println!(
                "{}• Punctuality:{}    {}% {}",
                CYAN,
                RESET,
                rate,
                paint_rate_label(rate, label)
            );
        }
        None => {
            println!(
                "{}• Punctuality:{}    {}no timetable / no sessions{}",
                CYAN, RESET, GREY, RESET
            );
        }
    }

    if !stats.anomalies.is_empty() {
        println!(
            "{}• Anomalies:{}      {} (excluded from totals, see --anomalies)",
            CYAN,
            RESET,
            stats.anomalies.len()
        );
    }
    println!();
}

fn print_sessions(stats: &UserStatistics, cfg: &Config) {
    if stats.sessions.is_empty() {
        println!("No work sessions in the selected period.");
        return;
    }

    let mut table = Table::new(vec!["Date", "Arrival", "Departure", "Hours"]);

    for s in &stats.sessions {
        table.add_row(vec![
            s.date.format("%Y-%m-%d").to_string(),
            s.arrival.format("%H:%M").to_string(),
            s.departure.format("%Y-%m-%d %H:%M").to_string(),
            format!("{:.2}", s.hours),
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));
}

fn print_anomalies(stats: &UserStatistics) {
    if stats.anomalies.is_empty() {
        println!("No anomalies detected. 🎉");
        return;
    }

    println!("Anomalies:");
    for a in &stats.anomalies {
        println!("- [{}] {}", a.kind_str(), a);
    }
    println!();
}
