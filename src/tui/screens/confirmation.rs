//! Confirmation screen — echoes the submitted payload.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::SubmissionPayload;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the confirmation screen.
///
/// Holds the payload handed over by a successful submit, if any.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationState {
    payload: Option<SubmissionPayload>,
}

impl ConfirmationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a freshly submitted payload.
    pub fn set_payload(&mut self, payload: SubmissionPayload) {
        self.payload = Some(payload);
    }

    /// Returns the payload being displayed, if any.
    pub fn payload(&self) -> Option<&SubmissionPayload> {
        self.payload.as_ref()
    }

    /// Drops the payload when the view is left.
    pub fn clear(&mut self) {
        self.payload = None;
    }
}

impl ScreenState for ConfirmationState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('b') | KeyCode::Esc => {
                Action::Navigate(Screen::Registration)
            }
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the confirmation screen. Renders nothing without a payload.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_confirmation(state: &ConfirmationState, frame: &mut Frame, area: Rect) {
    let Some(payload) = state.payload() else {
        return;
    };

    let block = Block::default()
        .title(" Registration Successful! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let rows: Vec<Row> = payload
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Line::styled(format!("{label}:"), label_style),
                Line::from(value),
            ])
        })
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(10)];
    frame.render_widget(Table::new(rows, widths), table_area);

    let footer = Paragraph::new(Line::from("Enter/b: Back to Form  q: quit  F1: help"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
