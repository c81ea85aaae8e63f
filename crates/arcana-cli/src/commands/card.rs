use colored::Colorize;

pub fn run(arcana_id: u8) -> Result<(), String> {
    let service = super::service(None);
    let card = service.card(arcana_id).map_err(|e| e.to_string())?;

    println!("  {} [{}]", card.to_string().bold(), format!("arcana {}", card.arcana_id).dimmed());
    println!();

    if !card.description_kr.is_empty() {
        println!("  {}", card.description_kr);
        println!();
    }

    if let Some(element) = &card.element {
        println!("  element:    {element}");
    }
    if let Some(planet) = &card.planet {
        println!("  planet:     {planet}");
    }
    println!("  numerology: {}", card.numerology);
    if !card.keywords_kr.is_empty() {
        println!("  keywords:   {}", card.keywords_kr.join(", "));
    }
    if !card.symbolism.is_empty() {
        println!("  symbolism:  {}", card.symbolism.join("; "));
    }
    println!();

    println!("  {}", "Upright:".dimmed());
    println!("    {}", card.upright.general);
    println!("  {}", "Reversed:".dimmed());
    println!("    {}", card.reversed.general);

    Ok(())
}
