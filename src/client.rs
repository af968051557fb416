use log::{debug, error, warn};
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::model::{RecipeRecord, SearchQuery, SearchResponse};

/// Client for the upstream recipe search API.
///
/// Pagination is cursor-style: the first request carries `from`/`to` bounds,
/// every subsequent request follows the fully-qualified `_links.next.href`
/// the server hands back. Transport and API errors are soft failures: the
/// loop stops, logs, and returns whatever was collected so far.
pub struct RecipeSearchClient {
    client: Client,
    config: ApiConfig,
}

impl RecipeSearchClient {
    pub fn new(config: ApiConfig) -> Self {
        if !config.has_credentials() {
            warn!(
                "searching without API credentials; \
                 expect an auth error from the upstream service"
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("papaya-recipes/0.3")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Accumulate up to `query.target_count` records across result pages.
    ///
    /// Never raises: a failed request, a bad status or an unparseable body
    /// ends the loop and the records gathered up to that point are returned.
    /// The result holds at most `target_count` records even when the final
    /// page carries more hits.
    pub fn fetch_recipes(&self, query: &SearchQuery) -> Vec<RecipeRecord> {
        let mut collected: Vec<RecipeRecord> = Vec::new();
        if query.target_count == 0 {
            return collected;
        }

        let mut next_url: Option<String> = None;
        loop {
            let request = match next_url.take() {
                // The continuation link already encodes auth and pagination
                // state; never re-attach the original parameter set to it.
                Some(url) => self.client.get(url),
                None => self.initial_request(query),
            };

            let response = match request.send() {
                Ok(response) => response,
                Err(err) => {
                    error!("recipe search request failed: {err}");
                    break;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().unwrap_or_default();
                error!("recipe search returned {status}: {body}");
                break;
            }

            let page: SearchResponse = match response.json() {
                Ok(page) => page,
                Err(err) => {
                    error!("could not parse recipe search response: {err}");
                    break;
                }
            };

            for hit in &page.hits {
                collected.push(RecipeRecord::from_recipe_json(&hit.recipe));
                if collected.len() >= query.target_count {
                    // reached the target mid-page; do not overshoot
                    collected.truncate(query.target_count);
                    return collected;
                }
            }

            match page.next_href() {
                Some(href) => {
                    debug!(
                        "collected {} of {} records, following next page",
                        collected.len(),
                        query.target_count
                    );
                    next_url = Some(href.to_string());
                }
                None => break,
            }
        }

        collected
    }

    /// First request of the loop: explicit `from`/`to` bounds capped at the
    /// configured chunk size, plus only the optional parameters the caller
    /// actually set (the server treats presence as meaningful).
    fn initial_request(&self, query: &SearchQuery) -> RequestBuilder {
        let to = query.target_count.min(self.config.page_chunk).to_string();
        let mut request = self
            .client
            .get(self.config.base_url.as_str())
            .query(&[("type", "public"), ("q", query.keyword.as_str())])
            .query(&[("from", "0"), ("to", to.as_str())]);

        if let Some(app_id) = &self.config.app_id {
            request = request.query(&[("app_id", app_id)]);
        }
        if let Some(app_key) = &self.config.app_key {
            request = request.query(&[("app_key", app_key)]);
        }
        if let Some(meal_type) = query.meal_type {
            request = request.query(&[("mealType", meal_type.as_str())]);
        }
        if let Some(diet) = &query.diet {
            request = request.query(&[("diet", diet)]);
        }
        if let Some(health) = &query.health {
            request = request.query(&[("health", health)]);
        }

        request
    }
}
