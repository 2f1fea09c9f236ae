use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::panes::SearchBox;
use super::toast::Toasts;
use crate::config::Config;
use crate::controllers::{
    SearchCompletion, SearchRequest, add_to_list, begin_search, complete_search, print_list,
    remove_from_list,
};
use crate::models::{SearchState, ShoppingList};
use crate::notify::{Notifier, Severity};
use crate::print::Printer;

pub enum AppAction {
    Continue,               // Keep running
    Search(SearchRequest),  // Send this request, report back via apply_completion
    Quit,                   // Esc pressed
}

pub struct CocktailApp {
    pane: Box<dyn Pane>,
    context: CocktailContext,
}

/// State shared by every pane
pub struct CocktailContext {
    pub search: SearchState,
    pub shopping_list: ShoppingList,
    pub toasts: Toasts,
    printer: Box<dyn Printer>,
    pending_search: Option<SearchRequest>,
}

impl CocktailContext {
    pub fn new(config: &Config, printer: Box<dyn Printer>) -> Self {
        Self {
            search: SearchState::new(config.default_query.clone()),
            shopping_list: ShoppingList::new(),
            toasts: Toasts::new(config.toast_duration),
            printer,
            pending_search: None,
        }
    }

    pub fn submit_search(&mut self) {
        if let Some(request) = begin_search(&mut self.search, &mut self.toasts) {
            self.pending_search = Some(request);
        }
    }

    /// Add the search result at `index` to the shopping list
    pub fn add_result(&mut self, index: usize) {
        if let Some(drink) = self.search.drinks.get(index).cloned() {
            add_to_list(&mut self.shopping_list, drink, &mut self.toasts);
        }
    }

    pub fn remove_entry(&mut self, name: &str) {
        remove_from_list(&mut self.shopping_list, name, &mut self.toasts);
    }

    pub fn print(&mut self) {
        // Failures are already logged and shown as a toast
        let _ = print_list(
            &self.shopping_list,
            self.printer.as_mut(),
            &mut self.toasts,
        );
    }
}

pub(crate) trait Pane {
    fn render(&self, context: &CocktailContext, frame: &mut Frame);
    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut CocktailContext,
    ) -> Option<Box<dyn Pane>>;
}

impl CocktailApp {
    pub fn new(config: &Config, printer: Box<dyn Printer>) -> Self {
        Self {
            pane: Box::new(SearchBox::new()),
            context: CocktailContext::new(config, printer),
        }
    }

    /// Kick off the search for the default query
    pub fn start(&mut self) -> Option<SearchRequest> {
        self.context.submit_search();
        let request = self.context.pending_search.take();
        if request.is_some() {
            self.context.toasts.notify("Searching...", Severity::Success);
        }
        request
    }

    pub fn render(&self, frame: &mut Frame) {
        self.pane.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Quit;
        }

        if let Some(next_pane) = self.pane.handle_key(key, &mut self.context) {
            self.pane = next_pane
        }

        match self.context.pending_search.take() {
            Some(request) => AppAction::Search(request),
            None => AppAction::Continue,
        }
    }

    pub fn apply_completion(&mut self, completion: SearchCompletion) -> bool {
        complete_search(&mut self.context.search, completion, &mut self.context.toasts)
    }

    pub fn tick(&mut self, now: Instant) {
        self.context.toasts.prune(now);
    }

    pub fn context(&self) -> &CocktailContext {
        &self.context
    }
}
