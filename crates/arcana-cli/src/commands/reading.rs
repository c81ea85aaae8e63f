use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_engine::ReadingRequest;

pub fn run(
    spread: &str,
    question: Option<&str>,
    user: Option<&str>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let spread = super::parse_spread(spread)?;
    let mut service = super::service(seed);

    let mut request = ReadingRequest::new(spread);
    if let Some(question) = question {
        request = request.with_question(question);
    }
    if let Some(user) = user {
        request = request.with_user(user);
    }

    let view = service.create_reading(request).map_err(|e| e.to_string())?;
    let reading = &view.reading;

    if json {
        let rendered =
            serde_json::to_string_pretty(reading).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} [{}]  {}",
        format!("Reading {}", reading.id).bold(),
        reading.spread,
        view.cosmic_energy.dimmed()
    );
    if let Some(question) = &reading.question {
        println!("  question: {question}");
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "Orientation", "Interpretation"]);
    for drawn in &reading.drawn_cards {
        let orientation = if drawn.reversed { "reversed" } else { "upright" };
        table.add_row(vec![
            drawn.position_name.clone(),
            drawn.card.to_string(),
            orientation.to_string(),
            super::preview(&drawn.interpretation, 70),
        ]);
    }
    println!("{table}");
    println!();

    if let Some(message) = &reading.overall_message {
        println!("  {}", "Overall:".dimmed());
        println!("  {message}");
        println!();
    }
    if let Some(advice) = &reading.advice {
        println!("  {}", "Advice:".dimmed());
        println!("  {advice}");
    }

    Ok(())
}
