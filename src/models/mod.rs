mod drink;
mod search_state;
mod shopping_list;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use drink::{Drink, INGREDIENT_SLOTS, extract_ingredients};
pub use search_state::{SearchPhase, SearchState};
pub use shopping_list::ShoppingList;
