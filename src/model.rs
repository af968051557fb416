use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::SearchError;

/// One recipe as returned by the upstream search API, projected into the
/// typed shape used by the filter stage and the rendering surface.
///
/// Records are never mutated after creation. Missing or malformed upstream
/// fields degrade to safe defaults instead of failing the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRecord {
    pub title: String,
    pub image_url: String,
    pub calories: f64,
    pub protein_grams: f64,
    pub source_url: String,
    pub ingredient_lines: Vec<String>,
}

impl RecipeRecord {
    /// Map one upstream recipe JSON object into a record.
    ///
    /// The upstream schema keys protein under `totalNutrients.PROCNT.quantity`;
    /// anything absent or of the wrong shape along that path becomes 0.
    pub(crate) fn from_recipe_json(recipe: &Value) -> Self {
        RecipeRecord {
            title: recipe
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or("No title")
                .to_string(),
            image_url: recipe
                .get("image")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            calories: recipe
                .get("calories")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            protein_grams: recipe
                .pointer("/totalNutrients/PROCNT/quantity")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            source_url: recipe
                .get("url")
                .and_then(Value::as_str)
                .unwrap_or("#")
                .to_string(),
            ingredient_lines: recipe
                .get("ingredientLines")
                .and_then(Value::as_array)
                .map(|lines| {
                    lines
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Meal types accepted by the upstream `mealType` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// The upstream query-parameter value for this meal type
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(SearchError::InvalidQuery(format!(
                "unknown meal type: {other}"
            ))),
        }
    }
}

/// Input to the search client.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub meal_type: Option<MealType>,
    pub diet: Option<String>,
    pub health: Option<String>,
    /// Maximum number of records to accumulate across pages
    pub target_count: usize,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, target_count: usize) -> Self {
        SearchQuery {
            keyword: keyword.into(),
            meal_type: None,
            diet: None,
            health: None,
            target_count,
        }
    }
}

/// User-chosen nutritional thresholds. `None` means no constraint on that
/// dimension, which is distinct from a bound of zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub max_calories: Option<f64>,
    pub min_protein: Option<f64>,
}

impl FilterCriteria {
    /// Both bounds are inclusive.
    pub fn matches(&self, record: &RecipeRecord) -> bool {
        self.max_calories
            .map_or(true, |max| record.calories <= max)
            && self
                .min_protein
                .map_or(true, |min| record.protein_grams >= min)
    }
}

/// One shopping-list entry: a recipe title plus its ingredient lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListEntry {
    pub recipe_title: String,
    pub ingredients: Vec<String>,
}

impl ShoppingListEntry {
    pub fn new(recipe_title: impl Into<String>, ingredients: Vec<String>) -> Self {
        ShoppingListEntry {
            recipe_title: recipe_title.into(),
            ingredients,
        }
    }
}

impl From<&RecipeRecord> for ShoppingListEntry {
    fn from(record: &RecipeRecord) -> Self {
        ShoppingListEntry {
            recipe_title: record.title.clone(),
            ingredients: record.ingredient_lines.clone(),
        }
    }
}

/// The filtered, ordered output of one search cycle plus the zero-based page
/// index the rendering surface is currently showing.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub records: Vec<RecipeRecord>,
    pub current_page: usize,
}

impl ResultSet {
    pub fn new(records: Vec<RecipeRecord>) -> Self {
        ResultSet {
            records,
            current_page: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// One page of the upstream search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
    #[serde(rename = "_links", default)]
    pub links: PageLinks,
}

impl SearchResponse {
    /// Fully-qualified continuation link, if the server supplied one
    pub(crate) fn next_href(&self) -> Option<&str> {
        self.links
            .next
            .as_ref()
            .and_then(|link| link.get("href"))
            .and_then(Value::as_str)
    }
}

/// One search hit: a wrapper around a recipe object plus hit metadata we
/// do not use.
#[derive(Debug, Deserialize)]
pub(crate) struct Hit {
    #[serde(default)]
    pub recipe: Value,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct PageLinks {
    #[serde(default)]
    pub next: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_maps_all_fields() {
        let recipe = json!({
            "label": "Shakshuka",
            "image": "https://img.example/shakshuka.jpg",
            "calories": 512.4,
            "totalNutrients": { "PROCNT": { "label": "Protein", "quantity": 27.9, "unit": "g" } },
            "url": "https://example.com/shakshuka",
            "ingredientLines": ["4 eggs", "1 can tomatoes"]
        });

        let record = RecipeRecord::from_recipe_json(&recipe);
        assert_eq!(record.title, "Shakshuka");
        assert_eq!(record.image_url, "https://img.example/shakshuka.jpg");
        assert_eq!(record.calories, 512.4);
        assert_eq!(record.protein_grams, 27.9);
        assert_eq!(record.source_url, "https://example.com/shakshuka");
        assert_eq!(record.ingredient_lines, vec!["4 eggs", "1 can tomatoes"]);
    }

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let record = RecipeRecord::from_recipe_json(&json!({}));
        assert_eq!(record.title, "No title");
        assert_eq!(record.image_url, "");
        assert_eq!(record.calories, 0.0);
        assert_eq!(record.protein_grams, 0.0);
        assert_eq!(record.source_url, "#");
        assert!(record.ingredient_lines.is_empty());
    }

    #[test]
    fn test_record_tolerates_malformed_nutrients() {
        // totalNutrients present but the wrong shape along the PROCNT path
        let recipe = json!({
            "label": "Mystery stew",
            "totalNutrients": "not an object"
        });
        let record = RecipeRecord::from_recipe_json(&recipe);
        assert_eq!(record.protein_grams, 0.0);

        let recipe = json!({
            "totalNutrients": { "PROCNT": { "quantity": "lots" } }
        });
        let record = RecipeRecord::from_recipe_json(&recipe);
        assert_eq!(record.protein_grams, 0.0);
    }

    #[test]
    fn test_missing_nutrient_defaults_interact_with_bounds() {
        let record = RecipeRecord::from_recipe_json(&json!({ "label": "Bare" }));

        let max_only = FilterCriteria {
            max_calories: Some(0.0),
            min_protein: None,
        };
        assert!(max_only.matches(&record));

        let min_protein = FilterCriteria {
            max_calories: None,
            min_protein: Some(0.1),
        };
        assert!(!min_protein.matches(&record));
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(
            "breakfast".parse::<MealType>().unwrap(),
            MealType::Breakfast
        );
        assert_eq!(" Dinner ".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_filter_criteria_bounds_are_inclusive() {
        let record = RecipeRecord {
            title: "Omelette".to_string(),
            image_url: String::new(),
            calories: 300.0,
            protein_grams: 20.0,
            source_url: "#".to_string(),
            ingredient_lines: vec![],
        };

        let exact = FilterCriteria {
            max_calories: Some(300.0),
            min_protein: Some(20.0),
        };
        assert!(exact.matches(&record));
    }

    #[test]
    fn test_next_href_extraction() {
        let page: SearchResponse = serde_json::from_value(json!({
            "hits": [],
            "_links": { "next": { "href": "https://api.example/page2", "title": "Next page" } }
        }))
        .unwrap();
        assert_eq!(page.next_href(), Some("https://api.example/page2"));

        let last: SearchResponse = serde_json::from_value(json!({ "hits": [] })).unwrap();
        assert_eq!(last.next_href(), None);
    }
}
