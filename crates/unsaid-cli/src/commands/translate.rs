use anyhow::Result;
use unsaid_application::TranslationService;

pub async fn run(service: &TranslationService, text: &str, session: &str) -> Result<()> {
    let record = service.translate(text, session).await?;

    println!("Clear:      {}", record.clear_expression);
    println!("Respectful: {}", record.respectful_expression);
    println!("Emotions:   {}", record.emotions.join(", "));
    println!("{} {}", record.validation_icon(), record.validation);
    println!();
    println!("Saved as {} (session '{}')", record.id, record.session_id);

    Ok(())
}
