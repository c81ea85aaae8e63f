use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let service = super::service(None);
    let cards = service.list_cards().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "이름", "Element", "Description"]);
    for card in &cards {
        table.add_row(vec![
            card.arcana_id.to_string(),
            card.name.clone(),
            card.name_kr.clone(),
            card.element.clone().unwrap_or_else(|| "—".to_string()),
            super::preview(&card.description_kr, 50),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
