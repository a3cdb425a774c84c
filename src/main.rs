// Slot Calendar
// Prints the configured view of a stored slot calendar as a text grid

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;

use slot_calendar::models::group::EdgeKind;
use slot_calendar::services::settings::SettingsService;
use slot_calendar::services::slot_store::SlotStore;
use slot_calendar::services::view_controller::ViewController;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let store_path = args.next();
    let reference = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw))?,
        None => Local::now().date_naive(),
    };

    let settings = SettingsService::from_default_location()?.get()?;
    let store = match store_path {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read slot store {}", path))?;
            SlotStore::from_json(&json).with_context(|| format!("Failed to load {}", path))?
        }
        None => SlotStore::new(),
    };

    log::info!("Loaded {} slots, showing {} around {}", store.len(), settings.default_frame, reference);
    let controller = ViewController::new(reference, &settings).with_store(store);
    print!("{}", render_grid(&controller));
    Ok(())
}

fn render_grid(controller: &ViewController) -> String {
    let days = controller.view();
    let mut out = String::from("      ");
    for day in &days {
        out.push_str(&format!("{:<12}", day.format("%a %d %b").to_string()));
    }
    out.push('\n');

    for hour in 0..24u8 {
        out.push_str(&format!("{:02}:00 ", hour));
        for &day in &days {
            let cell = match (controller.edge_at(day, hour), controller.group_at(day, hour)) {
                (Some(EdgeKind::Start | EdgeKind::Both), Some(group)) => {
                    let label = if group.item.label.is_empty() {
                        group.item.id.to_string()
                    } else {
                        group.item.label.clone()
                    };
                    format!("[{}", truncate(&label, 10))
                }
                (Some(EdgeKind::End), _) => "]".to_string(),
                (Some(EdgeKind::Middle), _) => "|".to_string(),
                _ => ".".to_string(),
            };
            out.push_str(&format!("{:<12}", cell));
        }
        out.push('\n');
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
