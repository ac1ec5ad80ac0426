use std::io::{self, BufRead, Write};

use recipe_finder::{render, FinderConfig, MealDbClient, RecipeFinder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config);
    let mut finder = RecipeFinder::new(client, config.baseline_category.clone());

    println!("Recipe Finder");
    println!("=============");

    finder.load().await;
    print!("{}", render::render_results(finder.phase(), finder.visible()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nSearch for recipes (\"quit\" to exit): ");
        io::stdout().flush()?;
        let query = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if query.trim() == "quit" {
            break;
        }

        let mut category = None;
        if !finder.categories().is_empty() {
            print!("{}", render::render_categories(finder.categories()));
            print!("Filter by category (number, blank for none): ");
            io::stdout().flush()?;
            let choice = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            category = choice
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| finder.categories().get(n.wrapping_sub(1)))
                .map(|c| c.name.clone());
        }

        finder.set_query(query);
        finder.select_category(category);
        finder.submit().await;
        print!("{}", render::render_results(finder.phase(), finder.visible()));
    }

    Ok(())
}
