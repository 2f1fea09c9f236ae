mod search_controller;
mod shopping_list_controller;

pub use search_controller::{
    SearchCompletion, SearchRequest, begin_search, complete_search, run_search,
};
pub use shopping_list_controller::{add_to_list, print_list, remove_from_list};
