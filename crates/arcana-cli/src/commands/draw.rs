use comfy_table::{ContentArrangement, Table};

pub fn run(count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut service = super::service(seed);
    let cards = service.draw_cards(count).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Keywords"]);
    for card in &cards {
        table.add_row(vec![
            card.arcana_id.to_string(),
            card.to_string(),
            card.keywords_kr.join(", "),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} cards drawn", cards.len());

    Ok(())
}
