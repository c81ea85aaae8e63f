pub fn run(query: &str) -> Result<(), String> {
    let service = super::service(None);
    let outcome = service.search_cards(query).map_err(|e| e.to_string())?;

    if let Some(notice) = &outcome.notice {
        println!("  {notice}");
        return Ok(());
    }

    if outcome.cards.is_empty() {
        println!("  No results for \"{query}\".");
        return Ok(());
    }

    println!("  {} results for \"{query}\":", outcome.cards.len());
    println!();

    for card in &outcome.cards {
        println!("  {} [arcana {}]", card, card.arcana_id);
        if !card.description_kr.is_empty() {
            println!("    {}", super::preview(&card.description_kr, 80));
        }
    }

    Ok(())
}
