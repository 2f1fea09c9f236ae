use crossterm::event::KeyCode;
use ratatui::Frame;

use super::app::{CocktailContext, Pane};
use super::view::{Focus, draw};

fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

pub(crate) struct SearchBox;

impl SearchBox {
    pub fn new() -> Self {
        Self
    }
}

impl Pane for SearchBox {
    fn render(&self, context: &CocktailContext, frame: &mut Frame) {
        draw(context, frame, Focus::Search, 0);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut CocktailContext,
    ) -> Option<Box<dyn Pane>> {
        match key {
            KeyCode::Char(c) => {
                context.search.query.push(c);
                None
            }
            KeyCode::Backspace => {
                context.search.query.pop();
                None
            }
            KeyCode::Enter => {
                context.submit_search();
                None
            }
            KeyCode::Tab | KeyCode::Down => Some(Box::new(ResultsPane::new())),
            KeyCode::BackTab => Some(Box::new(ShoppingPane::new())),
            _ => None,
        }
    }
}

pub(crate) struct ResultsPane {
    selected: usize,
}

impl ResultsPane {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Pane for ResultsPane {
    fn render(&self, context: &CocktailContext, frame: &mut Frame) {
        draw(context, frame, Focus::Results, self.selected);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut CocktailContext,
    ) -> Option<Box<dyn Pane>> {
        let count = context.search.drinks.len();
        // Results may have been replaced since the last key
        self.selected = clamp(self.selected, count);

        match key {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.selected = clamp(self.selected + 1, count);
                None
            }
            KeyCode::Enter | KeyCode::Char('+') => {
                if !context.search.loading {
                    context.add_result(self.selected);
                }
                None
            }
            KeyCode::Char('p') => {
                context.print();
                None
            }
            KeyCode::Char('/') | KeyCode::BackTab => Some(Box::new(SearchBox::new())),
            KeyCode::Tab => Some(Box::new(ShoppingPane::new())),
            _ => None,
        }
    }
}

pub(crate) struct ShoppingPane {
    selected: usize,
}

impl ShoppingPane {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Pane for ShoppingPane {
    fn render(&self, context: &CocktailContext, frame: &mut Frame) {
        draw(context, frame, Focus::ShoppingList, self.selected);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut CocktailContext,
    ) -> Option<Box<dyn Pane>> {
        let count = context.shopping_list.len();
        self.selected = clamp(self.selected, count);

        match key {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.selected = clamp(self.selected + 1, count);
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let name = context
                    .shopping_list
                    .get_index(self.selected)
                    .map(|(name, _)| name.clone());
                if let Some(name) = name {
                    context.remove_entry(&name);
                    self.selected = clamp(self.selected, context.shopping_list.len());
                }
                None
            }
            KeyCode::Char('p') => {
                context.print();
                None
            }
            KeyCode::Char('/') | KeyCode::Tab => Some(Box::new(SearchBox::new())),
            KeyCode::BackTab => Some(Box::new(ResultsPane::new())),
            _ => None,
        }
    }
}
