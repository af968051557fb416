use std::env;

use papaya_recipes::{
    write_shopping_list_pdf, ApiConfig, FilterCriteria, MealType, RecipeSearchClient, SearchQuery,
    SessionContext, ShoppingListEntry,
};

struct CliOptions {
    query: SearchQuery,
    criteria: FilterCriteria,
    pdf: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, Box<dyn std::error::Error>> {
    let mut keyword: Option<String> = None;
    let mut meal_type: Option<MealType> = None;
    let mut gluten_free = false;
    let mut max_calories: Option<f64> = None;
    let mut min_protein: Option<f64> = None;
    let mut count = 10usize;
    let mut pdf: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--meal-type" => {
                let value = iter.next().ok_or("--meal-type requires a value")?;
                meal_type = Some(value.parse()?);
            }
            "--gluten-free" => gluten_free = true,
            "--max-calories" => {
                let value = iter.next().ok_or("--max-calories requires a value")?;
                max_calories = Some(value.parse()?);
            }
            "--min-protein" => {
                let value = iter.next().ok_or("--min-protein requires a value")?;
                min_protein = Some(value.parse()?);
            }
            "--count" => {
                let value = iter.next().ok_or("--count requires a value")?;
                count = value.parse()?;
            }
            "--pdf" => {
                let value = iter.next().ok_or("--pdf requires a filename")?;
                pdf = Some(value.clone());
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {other}").into());
            }
            other => keyword = Some(other.to_string()),
        }
    }

    let keyword = keyword.ok_or(
        "Usage: papaya-recipes <keyword> [--meal-type TYPE] [--gluten-free] \
         [--max-calories N] [--min-protein N] [--count N] [--pdf FILE]",
    )?;

    let mut query = SearchQuery::new(keyword, count);
    query.meal_type = meal_type;
    if gluten_free {
        query.health = Some("gluten-free".to_string());
    }

    Ok(CliOptions {
        query,
        criteria: FilterCriteria {
            max_calories,
            min_protein,
        },
        pdf,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let config = ApiConfig::load()?;
    let client = RecipeSearchClient::new(config);
    let mut session = SessionContext::new();

    let results = session
        .on_search_submit(&client, &options.query, &options.criteria)?
        .records
        .clone();

    if results.is_empty() {
        println!(
            "No recipes found for '{}'. Try a different keyword!",
            options.query.keyword
        );
        return Ok(());
    }

    println!("Found {} recipe(s):\n", results.len());
    for (idx, recipe) in results.iter().enumerate() {
        println!("{}. {}", idx + 1, recipe.title);
        println!(
            "   {} kcal | {:.1} g protein",
            recipe.calories as i64, recipe.protein_grams
        );
        println!("   {}", recipe.source_url);
    }

    if let Some(filename) = options.pdf {
        for recipe in &results {
            session.on_add_to_list(ShoppingListEntry::from(recipe));
        }
        let path = write_shopping_list_pdf(session.shopping_list().snapshot(), &filename)?;
        println!("\nShopping list written to {}", path.display());
    }

    Ok(())
}
