use anyhow::Result;
use unsaid_application::TranslationService;

pub async fn run(service: &TranslationService, id: &str) -> Result<()> {
    service.delete(id).await?;
    println!("Deleted {id}");
    Ok(())
}

pub async fn clear(service: &TranslationService, session: &str) -> Result<()> {
    let removed = service.delete_all(session).await?;
    println!("Removed {removed} translation(s) from session '{session}'");
    Ok(())
}
