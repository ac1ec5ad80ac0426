use serde::Deserialize;

/// Minimal recipe data returned by the list, search and filter endpoints.
///
/// The provider only includes the full record in lookup responses, so every
/// summary has to be resolved by id before display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

/// Full recipe record returned by the lookup-by-id endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    /// External source URL; the provider leaves this null or empty for many
    /// records.
    #[serde(rename = "strSource")]
    pub source: Option<String>,
}

impl Recipe {
    /// Link to show on the recipe card. Falls back to the provider's own
    /// recipe page when no external source is recorded.
    pub fn source_url(&self) -> String {
        match &self.source {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("https://www.themealdb.com/meal/{}", self.id),
        }
    }
}

/// A recipe category, used to populate the filter selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// Wire envelope for the meal endpoints.
///
/// The provider reports "no matches" as `"meals": null` rather than an empty
/// array, hence the double layer of optionality.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Wire envelope for the categories endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Vec<Category>,
}
