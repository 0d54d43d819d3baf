use anyhow::Result;
use unsaid_application::TranslationService;

pub async fn run(service: &TranslationService, session: &str) -> Result<()> {
    let records = service.history(session).await?;

    if records.is_empty() {
        println!("No translations for session '{session}'.");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {}  [{}]",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.id,
            record.emotions.join(", ")
        );
        println!("  Clear:      {}", record.clear_expression);
        println!("  Respectful: {}", record.respectful_expression);
        println!("  {} {}", record.validation_icon(), record.validation);
        println!();
    }

    Ok(())
}
