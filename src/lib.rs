pub mod client;
pub mod config;
pub mod error;
pub mod finder;
pub mod model;
pub mod render;

pub use client::{MealDbClient, RecipeSource};
pub use config::FinderConfig;
pub use error::FinderError;
pub use finder::{Failure, Phase, RecipeFinder};
pub use model::{Category, Recipe, RecipeSummary};

/// One-shot name search against the configured provider
///
/// Fetches matching summaries and resolves each to its full record. Entries
/// whose detail lookup failed come back as `None`. An empty list covers both
/// "no matches" and an empty match set; use [`RecipeFinder`] when the
/// distinction matters.
pub async fn search_recipes(query: &str) -> Result<Vec<Option<Recipe>>, FinderError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config);
    let summaries = client.search_by_name(query).await?.unwrap_or_default();
    Ok(finder::resolve_details(&client, summaries).await)
}

/// One-shot category listing against the configured provider
pub async fn browse_category(category: &str) -> Result<Vec<Option<Recipe>>, FinderError> {
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config);
    let summaries = client.filter_by_category(category).await?.unwrap_or_default();
    Ok(finder::resolve_details(&client, summaries).await)
}
