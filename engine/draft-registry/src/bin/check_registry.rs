use draft_registry::ReferenceRegistry;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "conferences.csv".to_string());
    info!("Checking reference registry with conference table {}", path);

    let registry = ReferenceRegistry::load_from_file(&path).await?;

    println!("\nTeams:");
    println!("Abbr Name                          Color");
    println!("--------------------------------------------");
    for team in registry.teams().all() {
        println!("{:4} {:29} {}", team.abbrev, team.name, team.color);
    }

    let summary = serde_json::json!({
        "teams": registry.teams().len(),
        "colleges": registry.conferences().len(),
        "position_groups": registry.positions().len(),
    });
    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
