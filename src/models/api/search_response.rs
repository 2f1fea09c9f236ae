use serde::Deserialize;

use crate::models::Drink;

/// Body of `search.php`
/// A search with no match comes back as `{"drinks": null}`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Drink>>,
}

impl SearchResponse {
    pub fn into_drinks(self) -> Vec<Drink> {
        self.drinks.unwrap_or_default()
    }
}
