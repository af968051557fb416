pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pdf;
pub mod session;
pub mod shopping;

pub use client::RecipeSearchClient;
pub use config::ApiConfig;
pub use error::SearchError;
pub use filter::apply_filters;
pub use model::{
    FilterCriteria, MealType, RecipeRecord, ResultSet, SearchQuery, ShoppingListEntry,
};
pub use pdf::write_shopping_list_pdf;
pub use session::{SessionContext, DEFAULT_PAGE_SIZE};
pub use shopping::ShoppingList;
