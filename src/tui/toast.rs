use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::notify::{Notifier, Severity};

const MAX_VISIBLE: usize = 4;
const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Short-lived notifications drawn in the bottom-right corner
#[derive(Debug)]
pub struct Toasts {
    duration: Duration,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: Vec::new(),
        }
    }

    pub fn push_at(&mut self, message: &str, severity: Severity, now: Instant) {
        self.items.push(Toast {
            message: message.to_string(),
            severity,
            expires_at: now + self.duration,
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
    }

    /// Drop every toast whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Rgb(0x4c, 0xaf, 0x50),
        Severity::Error => Color::Rgb(0xf4, 0x43, 0x36),
        Severity::Neutral => Color::Rgb(0x33, 0x33, 0x33),
    }
}

/// Stack toasts upward from the bottom-right of `area`, newest lowest
pub fn render_toasts(toasts: &Toasts, frame: &mut Frame, area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    let mut bottom = area.bottom();

    for toast in toasts.visible().iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let rect = Rect::new(x, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
        let style = Style::default()
            .fg(Color::White)
            .bg(severity_color(toast.severity));

        let paragraph = Paragraph::new(toast.message.as_str())
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).style(style));

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
        bottom -= TOAST_HEIGHT;
    }
}
