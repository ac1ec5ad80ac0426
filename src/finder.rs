use futures::future::join_all;
use log::{debug, warn};

use crate::client::RecipeSource;
use crate::error::FinderError;
use crate::model::{Category, Recipe, RecipeSummary};

/// User-visible failure kinds
///
/// Everything the provider can do wrong folds into one of these two
/// messages; transport detail is logged, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The provider answered but matched nothing
    NoResults,
    /// The provider could not be reached or answered with an error status
    FetchFailed,
}

impl Failure {
    pub const fn message(self) -> &'static str {
        match self {
            Failure::NoResults => "No recipes found",
            Failure::FetchFailed => "Error fetching recipes. Please try again.",
        }
    }
}

/// Lifecycle of the currently tracked fetch attempt
///
/// A single tagged union instead of separate loading and error flags, so a
/// loading state and a failure can never be set at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Failed(Failure),
}

/// Handle for one issued fetch attempt, used to fence out stale responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a submitted search resolved to on the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRequest {
    /// All recipes in a category; takes precedence over any query text
    Category,
    /// Free-text name search, matching delegated to the provider
    Name,
}

/// Result of performing a search, to be applied back onto the finder state
#[derive(Debug)]
pub struct SearchOutcome(Result<Vec<Option<Recipe>>, Failure>);

/// Resolve every summary to its full record, all lookups in flight at once
///
/// The joined list preserves summary order. An individual lookup failure is
/// contained as a `None` entry rather than aborting the batch.
pub async fn resolve_details<S: RecipeSource>(
    source: &S,
    summaries: Vec<RecipeSummary>,
) -> Vec<Option<Recipe>> {
    let lookups = summaries.into_iter().map(|summary| async move {
        match source.lookup(&summary.id).await {
            Ok(Some(recipe)) => Some(recipe),
            Ok(None) => {
                warn!("Recipe {} vanished between listing and lookup", summary.id);
                None
            }
            Err(e) => {
                warn!("Failed to fetch details for recipe {}: {}", summary.id, e);
                None
            }
        }
    });

    join_all(lookups).await
}

/// The search controller
///
/// Owns all session state and orchestrates the provider calls: the initial
/// baseline and category loads, and query/filter submissions. Rendering is
/// done elsewhere from the state exposed here.
pub struct RecipeFinder<S> {
    source: S,
    baseline_category: String,
    query: String,
    selected_category: Option<String>,
    categories: Vec<Category>,
    visible: Vec<Option<Recipe>>,
    baseline: Vec<Option<Recipe>>,
    phase: Phase,
    issued: u64,
    latest: u64,
}

impl<S: RecipeSource> RecipeFinder<S> {
    pub fn new(source: S, baseline_category: impl Into<String>) -> Self {
        RecipeFinder {
            source,
            baseline_category: baseline_category.into(),
            query: String::new(),
            selected_category: None,
            categories: Vec::new(),
            visible: Vec::new(),
            baseline: Vec::new(),
            phase: Phase::Idle,
            issued: 0,
            latest: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The recipes currently on display; `None` entries are recipes whose
    /// detail lookup failed
    pub fn visible(&self) -> &[Option<Recipe>] {
        &self.visible
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
    }

    /// Initial load: categories and the baseline recipe set, fetched
    /// concurrently with no ordering dependency between them
    ///
    /// A category-load failure is logged and leaves the selector empty; only
    /// the baseline load drives the visible phase.
    pub async fn load(&mut self) {
        let ticket = self.begin();

        let (categories, outcome) = tokio::join!(
            self.source.categories(),
            Self::fetch_category(&self.source, self.baseline_category.clone()),
        );

        match categories {
            Ok(list) => self.categories = list,
            Err(e) => warn!("Failed to fetch categories: {}", e),
        }

        if self.apply(ticket, outcome) {
            self.baseline = self.visible.clone();
        }
    }

    /// Handle a form submission with the current query and category
    ///
    /// A selected category wins over any query text. With neither set, the
    /// stored baseline is restored without touching the network.
    pub async fn submit(&mut self) {
        match self.request() {
            Some(SearchRequest::Category) => {
                let category = self.selected_category.clone().unwrap_or_default();
                let ticket = self.begin();
                let outcome = Self::fetch_category(&self.source, category).await;
                self.apply(ticket, outcome);
            }
            Some(SearchRequest::Name) => {
                let query = self.query.clone();
                let ticket = self.begin();
                let outcome = Self::fetch_name(&self.source, query).await;
                self.apply(ticket, outcome);
            }
            None => {
                self.visible = self.baseline.clone();
            }
        }
    }

    /// Which network path, if any, the current form state selects
    pub fn request(&self) -> Option<SearchRequest> {
        if self.selected_category.is_some() {
            Some(SearchRequest::Category)
        } else if !self.query.is_empty() {
            Some(SearchRequest::Name)
        } else {
            None
        }
    }

    /// Start tracking a new fetch attempt
    ///
    /// Entering `Loading` clears any previous failure; the returned ticket
    /// must be handed back to [`apply`](Self::apply) with the outcome.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.latest = self.issued;
        self.phase = Phase::Loading;
        Ticket(self.issued)
    }

    /// Apply a fetch outcome, unless a newer attempt superseded it
    ///
    /// Returns false when the outcome was stale and dropped. The visible
    /// list is replaced wholesale on success and cleared on failure; nothing
    /// is ever merged.
    pub fn apply(&mut self, ticket: Ticket, outcome: SearchOutcome) -> bool {
        if ticket.0 != self.latest {
            debug!("Discarding stale response for fetch attempt #{}", ticket.0);
            return false;
        }

        match outcome.0 {
            Ok(recipes) => {
                self.visible = recipes;
                self.phase = Phase::Idle;
            }
            Err(failure) => {
                self.visible = Vec::new();
                self.phase = Phase::Failed(failure);
            }
        }
        true
    }

    /// Fetch all recipes in a category and resolve their details
    pub async fn fetch_category(source: &S, category: String) -> SearchOutcome {
        Self::resolve_summaries(source, source.filter_by_category(&category).await).await
    }

    /// Fetch recipes matching a name query and resolve their details
    pub async fn fetch_name(source: &S, query: String) -> SearchOutcome {
        Self::resolve_summaries(source, source.search_by_name(&query).await).await
    }

    async fn resolve_summaries(
        source: &S,
        summaries: Result<Option<Vec<RecipeSummary>>, FinderError>,
    ) -> SearchOutcome {
        match summaries {
            Ok(Some(summaries)) => SearchOutcome(Ok(resolve_details(source, summaries).await)),
            Ok(None) => SearchOutcome(Err(Failure::NoResults)),
            Err(e) => {
                warn!("Failed to fetch recipes: {}", e);
                SearchOutcome(Err(Failure::FetchFailed))
            }
        }
    }
}
