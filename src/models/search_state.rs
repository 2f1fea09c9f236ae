use super::Drink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results,
    Failed,
}

/// Everything the UI knows about the current search
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub drinks: Vec<Drink>,
    pub loading: bool,
    pub phase: SearchPhase,
    /// Sequence number of the most recently issued request (0 = none yet)
    pub latest_request: u64,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            drinks: Vec::new(),
            loading: false,
            phase: SearchPhase::Idle,
            latest_request: 0,
        }
    }
}
