use std::fmt::Write;

use crate::finder::Phase;
use crate::model::{Category, Recipe};

/// Render the result area for the current phase and visible recipes
///
/// While a fetch is in flight only the loading line is shown; a failure
/// replaces the grid with its message. Otherwise one card per entry, with a
/// placeholder for recipes whose detail lookup failed.
pub fn render_results(phase: Phase, recipes: &[Option<Recipe>]) -> String {
    match phase {
        Phase::Loading => "Loading...\n".to_string(),
        Phase::Failed(failure) => format!("{}\n", failure.message()),
        Phase::Idle => {
            let mut out = String::new();
            for (index, entry) in recipes.iter().enumerate() {
                match entry {
                    Some(recipe) => render_card(&mut out, index + 1, recipe),
                    None => {
                        let _ = writeln!(out, "{}. (recipe unavailable)", index + 1);
                    }
                }
            }
            out
        }
    }
}

fn render_card(out: &mut String, position: usize, recipe: &Recipe) {
    let _ = writeln!(out, "{}. {}", position, recipe.name);
    let _ = writeln!(out, "   Category: {}", recipe.category);
    let _ = writeln!(out, "   Thumbnail: {}", recipe.thumbnail);
    let _ = writeln!(out, "   View: {}", recipe.source_url());
}

/// Render the category selector as a numbered list
pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for (index, category) in categories.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", index + 1, category.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::Failure;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: "52959".to_string(),
            name: name.to_string(),
            category: "Seafood".to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            source: Some("https://example.com/full".to_string()),
        }
    }

    #[test]
    fn test_loading_suppresses_grid() {
        let recipes = vec![Some(recipe("Baked salmon"))];
        let out = render_results(Phase::Loading, &recipes);
        assert_eq!(out, "Loading...\n");
    }

    #[test]
    fn test_failure_replaces_grid() {
        let recipes = vec![Some(recipe("Baked salmon"))];
        let out = render_results(Phase::Failed(Failure::NoResults), &recipes);
        assert_eq!(out, "No recipes found\n");
    }

    #[test]
    fn test_cards_show_name_category_and_link() {
        let recipes = vec![Some(recipe("Baked salmon")), None];
        let out = render_results(Phase::Idle, &recipes);

        assert!(out.contains("1. Baked salmon"));
        assert!(out.contains("Category: Seafood"));
        assert!(out.contains("View: https://example.com/full"));
        assert!(out.contains("2. (recipe unavailable)"));
    }

    #[test]
    fn test_card_link_falls_back_to_provider_page() {
        let mut r = recipe("Baked salmon");
        r.source = None;
        let out = render_results(Phase::Idle, &[Some(r)]);
        assert!(out.contains("View: https://www.themealdb.com/meal/52959"));
    }

    #[test]
    fn test_empty_idle_renders_nothing() {
        assert!(render_results(Phase::Idle, &[]).is_empty());
    }

    #[test]
    fn test_category_selector() {
        let categories = vec![
            Category {
                id: "1".to_string(),
                name: "Beef".to_string(),
            },
            Category {
                id: "8".to_string(),
                name: "Seafood".to_string(),
            },
        ];
        let out = render_categories(&categories);
        assert_eq!(out, "  [1] Beef\n  [2] Seafood\n");
    }
}
