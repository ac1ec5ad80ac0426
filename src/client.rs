use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::model::{CategoriesEnvelope, Category, MealsEnvelope, Recipe, RecipeSummary};

/// Unified trait for recipe data providers
///
/// The provider is the only external collaborator; putting the seam here
/// lets the search controller be driven by a scripted source in tests.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// List all recipe categories
    async fn categories(&self) -> Result<Vec<Category>, FinderError>;

    /// List recipe summaries belonging to a category
    ///
    /// `Ok(None)` means the provider matched nothing, as opposed to a
    /// transport or status failure.
    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, FinderError>;

    /// List recipe summaries whose name matches a free-text query
    async fn search_by_name(
        &self,
        query: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, FinderError>;

    /// Fetch the full record for a single recipe id
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, FinderError>;
}

/// HTTP client for the MealDB-style recipe API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("recipe-finder/0.3")
            .build()
            .expect("Failed to create HTTP client");

        MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET one of the meal-envelope endpoints with a single query parameter
    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        param: (&str, &str),
    ) -> Result<Option<Vec<T>>, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} ?{}={}", url, param.0, param.1);

        let response = self.client.get(&url).query(&[param]).send().await?;
        if !response.status().is_success() {
            return Err(FinderError::Status(response.status()));
        }

        let envelope: MealsEnvelope<T> = response.json().await?;
        Ok(envelope.meals)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn categories(&self) -> Result<Vec<Category>, FinderError> {
        let url = format!("{}/categories.php", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FinderError::Status(response.status()));
        }

        let envelope: CategoriesEnvelope = response.json().await?;
        Ok(envelope.categories)
    }

    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, FinderError> {
        self.get_meals("filter.php", ("c", category)).await
    }

    async fn search_by_name(
        &self,
        query: &str,
    ) -> Result<Option<Vec<RecipeSummary>>, FinderError> {
        self.get_meals("search.php", ("s", query)).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, FinderError> {
        let meals: Option<Vec<Recipe>> = self.get_meals("lookup.php", ("i", id)).await?;
        Ok(meals.and_then(|records| records.into_iter().next()))
    }
}
