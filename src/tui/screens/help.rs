//! Help screen — one-page keybinding table for the screen it was opened from.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static REGISTRATION_KEYS: &[(&str, &str)] = &[
    ("Tab / ↓", "next field"),
    ("Shift-Tab / ↑", "previous field"),
    ("← / →", "choose phone code, country or city"),
    ("Backspace", "delete last character"),
    ("F2", "show / hide password"),
    ("Enter", "submit"),
    ("Esc", "quit"),
];

static CONFIRMATION_KEYS: &[(&str, &str)] = &[
    ("Enter / b / Esc", "back to form"),
    ("q", "quit"),
];

/// Keys shared by every screen.
static GLOBAL_KEYS: &[(&str, &str)] = &[("F1", "this help"), ("Ctrl-C", "quit")];

/// State for the help screen: which screen to describe and return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpState {
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    pub fn new() -> Self {
        Self {
            origin: Screen::Registration,
        }
    }

    /// Returns the screen help was opened from.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

/// Bindings listed for `screen`, screen-specific first.
fn bindings(screen: Screen) -> Vec<(&'static str, &'static str)> {
    let specific: &[(&str, &str)] = match screen {
        Screen::Registration => REGISTRATION_KEYS,
        Screen::Confirmation => CONFIRMATION_KEYS,
        Screen::Help => &[],
    };
    specific.iter().chain(GLOBAL_KEYS).copied().collect()
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Keys: {} ", state.origin().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let key_style = Style::default().fg(Color::Yellow);
    let rows: Vec<Row> = bindings(state.origin())
        .into_iter()
        .map(|(key, desc)| Row::new(vec![key, desc]).style(key_style))
        .collect();
    let widths = [Constraint::Length(18), Constraint::Min(10)];
    frame.render_widget(Table::new(rows, widths), table_area);

    let footer = Paragraph::new("q/Esc/Enter: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
