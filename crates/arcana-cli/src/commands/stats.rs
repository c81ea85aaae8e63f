use chrono::Utc;
use comfy_table::{ContentArrangement, Table};

use arcana_engine::ReadingRequest;

pub fn run(readings: u32, spread: &str, seed: Option<u64>) -> Result<(), String> {
    let spread = super::parse_spread(spread)?;
    let mut service = super::service(seed);

    for _ in 0..readings {
        service
            .create_reading(ReadingRequest::new(spread))
            .map_err(|e| e.to_string())?;
    }

    let today = Utc::now().date_naive();
    let row = service
        .stats_for(today)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "no readings recorded today".to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Day", "Total", "Single", "Three-card", "Celtic Cross"]);
    table.add_row(vec![
        row.day.to_string(),
        row.total.to_string(),
        row.single.to_string(),
        row.three_card.to_string(),
        row.celtic_cross.to_string(),
    ]);
    println!("{table}");

    let overview = service.stats_overview().map_err(|e| e.to_string())?;
    println!();
    println!(
        "  all-time: {} readings ({} today; {} single, {} three-card, {} celtic cross)",
        overview.total, overview.today, overview.single, overview.three_card, overview.celtic_cross
    );

    Ok(())
}
