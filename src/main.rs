mod cli;
mod client;
mod models;

use cli::Mode;
use client::{FetchConfig, ReqwestTransport, Transport};
use cli_table::{format::Justify, Cell, Style, Table};
use colored::*;
use models::{Availability, Component, ComponentStatus, StatusSummary};
use std::collections::HashMap;

fn main() {
    let settings = cli::parse_args();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\n👋 Operation cancelled by user");
        std::process::exit(0);
    }) {
        eprintln!("Error installing interrupt handler: {:?}", e);
    }

    let config = FetchConfig::default();
    if let Err(e) = run(settings.mode, &config, &ReqwestTransport) {
        println!("{}", format!("\n❌ Error: {}", e).red());
    }
}

fn run(
    mode: Mode,
    config: &FetchConfig,
    transport: &dyn Transport,
) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        Mode::Quick => quick_status_check(config, transport),
        Mode::Simple => simple_check(config, transport),
        Mode::Full => full_check(config, transport),
    }
}

fn fetch_or_report(config: &FetchConfig, transport: &dyn Transport) -> Option<StatusSummary> {
    let summary = client::fetch_summary(config, transport);
    if summary.is_none() {
        println!("{}", "❌ Unable to fetch status data".red());
    }
    summary
}

fn quick_status_check(
    config: &FetchConfig,
    transport: &dyn Transport,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = match fetch_or_report(config, transport) {
        Some(summary) => summary,
        None => return Ok(()),
    };
    println!("{}", get_quick_visualization(&summary)?);
    Ok(())
}

fn simple_check(
    config: &FetchConfig,
    transport: &dyn Transport,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = match fetch_or_report(config, transport) {
        Some(summary) => summary,
        None => return Ok(()),
    };
    println!("{}", get_simple_visualization(&summary));
    Ok(())
}

fn full_check(
    config: &FetchConfig,
    transport: &dyn Transport,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = match fetch_or_report(config, transport) {
        Some(summary) => summary,
        None => return Ok(()),
    };
    println!("{}", get_full_visualization(&summary));
    Ok(())
}

fn get_quick_visualization(summary: &StatusSummary) -> Result<String, std::io::Error> {
    let availability = calculate_availability(&summary.components);
    let (health, health_icon) = health_label(availability.percent);

    let mut result = String::new();
    result.push_str(&format!("{}\n", "🚀 RED HAT GLOBAL STATUS".magenta().bold()));
    result.push_str(&format!("{}\n", "=".repeat(60)));
    result.push_str(&format!("📍 Page: {}\n", summary.page.name));
    result.push_str(&format!("🔗 URL: {}\n", summary.page.url));
    result.push_str(&format!("🕒 Last Update: {}\n", summary.page.updated_at));
    result.push('\n');
    result.push_str(&format!("🔧 STATUS: {}\n", summary.status.description));
    result.push_str(&format!("🏷️  Severity: {}\n", summary.status.indicator));
    result.push('\n');

    let percent_text = format!(
        "{:.1}% ({}/{} services)",
        availability.percent, availability.operational, availability.total
    );
    let colored_percent = if availability.percent >= 95.0 {
        percent_text.green()
    } else {
        percent_text.red()
    };
    let rows = vec![
        vec![
            "global availability".magenta().bold().cell().bold(true),
            "overall health".magenta().bold().cell().bold(true),
        ],
        vec![
            colored_percent.cell().justify(Justify::Left),
            format!("{} {}", health_icon, health)
                .bold()
                .cell()
                .justify(Justify::Left),
        ],
    ];
    let table = rows.table().bold(true);
    result.push_str(&table.display()?.to_string());
    result.push('\n');
    Ok(result)
}

fn get_simple_visualization(summary: &StatusSummary) -> String {
    let main_services: Vec<&Component> = summary
        .components
        .iter()
        .filter(|c| c.group_id.is_none())
        .collect();
    let availability = calculate_availability(main_services.iter().copied());

    let mut result = String::new();
    result.push_str(&format!("{}\n", "🔍 RED HAT MAIN SERVICES".magenta().bold()));
    result.push_str(&format!("{}\n", "=".repeat(60)));
    result.push_str(&format!(
        "📊 Main Services Availability: {:.1}% ({}/{})\n",
        availability.percent, availability.operational, availability.total
    ));
    result.push('\n');

    for service in main_services {
        result.push_str(&format!(
            "{} {}{}\n",
            status_icon(&service.status, false),
            service.name,
            status_text(&service.status)
        ));
    }
    result
}

fn get_full_visualization(summary: &StatusSummary) -> String {
    let availability = calculate_availability(&summary.components);

    let mut result = String::new();
    result.push_str(&format!(
        "{}\n",
        "🌍 RED HAT COMPLETE SERVICE STATUS".magenta().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(60)));
    result.push_str(&format!(
        "🟢 Global Availability: {:.1}% ({}/{} services)\n",
        availability.percent, availability.operational, availability.total
    ));
    result.push('\n');

    let mut main_services: Vec<&Component> = Vec::new();
    let mut sub_services: HashMap<&str, Vec<&Component>> = HashMap::new();
    for component in summary.components.iter() {
        match &component.group_id {
            None => main_services.push(component),
            Some(group_id) => sub_services.entry(group_id).or_default().push(component),
        }
    }

    // sub-services whose group_id matches no main service are dropped here
    for service in main_services {
        result.push_str(&format!(
            "{} {}\n",
            status_icon(&service.status, false),
            service.name
        ));
        if let Some(children) = sub_services.get(service.id.as_str()) {
            for sub_service in children {
                result.push_str(&format!(
                    "{} {}\n",
                    status_icon(&sub_service.status, true),
                    sub_service.name
                ));
            }
        }
    }
    result
}

fn calculate_availability<'a>(components: impl IntoIterator<Item = &'a Component>) -> Availability {
    let mut total = 0;
    let mut operational = 0;
    for component in components {
        total += 1;
        if component.status == ComponentStatus::Operational {
            operational += 1;
        }
    }
    if total == 0 {
        return Availability {
            percent: 0.0,
            operational: 0,
            total: 0,
        };
    }
    Availability {
        percent: operational as f64 / total as f64 * 100.0,
        operational,
        total,
    }
}

fn health_label(percent: f64) -> (&'static str, &'static str) {
    if percent >= 99.0 {
        ("EXCELLENT", "🏥")
    } else if percent >= 95.0 {
        ("GOOD", "✅")
    } else if percent >= 90.0 {
        ("FAIR", "⚠️")
    } else {
        ("POOR", "❌")
    }
}

fn status_icon(status: &ComponentStatus, is_sub_service: bool) -> String {
    let icon = match status {
        ComponentStatus::Operational => "✅",
        ComponentStatus::DegradedPerformance => "🟡",
        ComponentStatus::PartialOutage => "🟠",
        ComponentStatus::MajorOutage => "🔴",
        ComponentStatus::Maintenance => "🔧",
        ComponentStatus::Other(_) => "❓",
    };
    if is_sub_service {
        format!("  ├─ {}", icon)
    } else {
        icon.to_string()
    }
}

fn status_text(status: &ComponentStatus) -> String {
    match status {
        ComponentStatus::Operational => String::new(),
        ComponentStatus::DegradedPerformance => " - Performance Issues".to_string(),
        ComponentStatus::PartialOutage => " - Partial Outage".to_string(),
        ComponentStatus::MajorOutage => " - Major Outage".to_string(),
        ComponentStatus::Maintenance => " - Under Maintenance".to_string(),
        ComponentStatus::Other(raw) => format!(" - {}", title_case(raw)),
    }
}

fn title_case(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}
