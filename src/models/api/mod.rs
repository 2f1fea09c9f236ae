mod search_response;

pub use search_response::SearchResponse;
