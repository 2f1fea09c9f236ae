use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::CocktailContext;
use super::toast::render_toasts;
use crate::models::Drink;
use crate::print::PRINT_TITLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Search,
    Results,
    ShoppingList,
}

/// Draw the whole screen from the current context
///
/// Pure with respect to the context: nothing here notifies or mutates.
pub(crate) fn draw(context: &CocktailContext, frame: &mut Frame, focus: Focus, selected: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Results + shopping list
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[1]);

    draw_search_box(context, frame, rows[0], focus == Focus::Search);
    draw_results(context, frame, columns[0], focus == Focus::Results, selected);
    draw_shopping_list(context, frame, columns[1], focus == Focus::ShoppingList, selected);
    draw_help(frame, rows[2], focus);
    render_toasts(&context.toasts, frame, rows[1]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_search_box(context: &CocktailContext, frame: &mut Frame, area: Rect, focused: bool) {
    let input = Paragraph::new(context.search.query.as_str())
        .block(pane_block("Cocktail Search (Enter to search)", focused));
    frame.render_widget(input, area);

    if focused {
        let typed = u16::try_from(context.search.query.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed);
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_results(
    context: &CocktailContext,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    selected: usize,
) {
    let block = pane_block("Results", focused);
    let drinks = &context.search.drinks;

    if context.search.loading {
        frame.render_widget(Paragraph::new("Please wait..").block(block), area);
        return;
    }
    if drinks.is_empty() {
        frame.render_widget(Paragraph::new("No results found.").block(block), area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = drinks.iter().map(|drink| result_item(drink, width)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("+ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(selected.min(drinks.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn result_item(drink: &Drink, width: usize) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        drink.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let details: Vec<&str> = [&drink.category, &drink.glass, &drink.alcoholic]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();
    if !details.is_empty() {
        lines.push(Line::from(Span::styled(
            details.join(" · "),
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(instructions) = &drink.instructions {
        lines.push(Line::from(Span::styled(
            truncate(instructions, width),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

fn draw_shopping_list(
    context: &CocktailContext,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    selected: usize,
) {
    let list = &context.shopping_list;
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = list
        .iter()
        .map(|(name, drink)| {
            let mut lines = vec![Line::from(Span::styled(
                name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.extend(
                drink
                    .ingredients()
                    .into_iter()
                    .map(|ingredient| Line::from(truncate(&format!("- {}", ingredient), width))),
            );
            ListItem::new(Text::from(lines))
        })
        .collect();

    let widget = List::new(items)
        .block(pane_block(PRINT_TITLE, focused))
        .highlight_style(Style::default().fg(Color::Red));

    let mut state = ListState::default();
    if focused && !list.is_empty() {
        state.select(Some(selected.min(list.len() - 1)));
    }
    frame.render_stateful_widget(widget, area, &mut state);
}

fn draw_help(frame: &mut Frame, area: Rect, focus: Focus) {
    let keys = match focus {
        Focus::Search => "Type to edit  Enter search  Tab results  Esc quit",
        Focus::Results => "↑/↓ select  Enter/+ add  p print  Tab shopping list  Esc quit",
        Focus::ShoppingList => "↑/↓ select  d remove  p print  Tab search  Esc quit",
    };
    let help = Paragraph::new(keys).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_leaves_short_text() {
        assert_eq!(truncate("Shake well.", 20), "Shake well.");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("Shake with ice", 6), "Shake…");
    }
}
