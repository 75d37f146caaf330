//! Registration screen — the input form with live validity and submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::config::Settings;
use crate::model::{Field, FieldKind, FormEngine, FormRecord, PHONE_CODES, ValidationResult};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    engine: FormEngine,
    default_phone_code: String,
    record: FormRecord,
    focus: Field,
    /// Errors from the last submit attempt.
    errors: ValidationResult,
    show_password: bool,
    initial_show_password: bool,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new(FormEngine::default(), &Settings::default())
    }
}

impl RegistrationState {
    /// Creates a fresh form using the configured phone code and password
    /// visibility.
    pub fn new(engine: FormEngine, settings: &Settings) -> Self {
        Self {
            engine,
            default_phone_code: settings.default_phone_code.clone(),
            record: FormRecord::new(settings.default_phone_code.clone()),
            focus: Field::FirstName,
            errors: ValidationResult::default(),
            show_password: settings.show_password,
            initial_show_password: settings.show_password,
        }
    }

    /// Returns the current record.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Returns the focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Returns the errors from the last submit attempt.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    /// Whether the current record may be submitted.
    pub fn is_form_valid(&self) -> bool {
        self.engine.is_form_valid(&self.record)
    }

    /// Discards the session and starts over with a fresh record.
    pub fn reset(&mut self) {
        self.record = FormRecord::new(self.default_phone_code.clone());
        self.focus = Field::FirstName;
        self.errors = ValidationResult::default();
        self.show_password = self.initial_show_password;
    }

    /// Progress summary for the status bar.
    pub fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            completed: self.engine.completed_fields(&self.record),
            total: Field::all().iter().filter(|f| f.is_validated()).count(),
            ready: self.is_form_valid(),
        }
    }

    /// Options a choice field can cycle through, placeholder (`""`) first.
    ///
    /// The city list is empty while no known country is selected.
    pub fn options(&self, field: Field) -> Vec<&'static str> {
        let table = self.engine.table();
        match field {
            Field::PhoneCode => PHONE_CODES.to_vec(),
            Field::Country => std::iter::once("").chain(table.countries()).collect(),
            Field::City => match table.cities(self.record.get(Field::Country)) {
                Some(cities) => std::iter::once("").chain(cities.iter().copied()).collect(),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// The city selector is disabled until a country is chosen.
    pub fn is_disabled(&self, field: Field) -> bool {
        field == Field::City && self.record.get(Field::Country).is_empty()
    }

    /// Text shown for `field`: masked password, or a placeholder for an
    /// empty choice.
    pub fn display_value(&self, field: Field) -> String {
        let value = self.record.get(field);
        match field.kind() {
            FieldKind::Secret if !self.show_password => "*".repeat(value.chars().count()),
            FieldKind::Choice if value.is_empty() => format!("Select {}", field.label()),
            _ => value.to_string(),
        }
    }

    /// Builds the form view for rendering.
    pub fn form(&self) -> Form {
        let fields = Field::all()
            .iter()
            .map(|&field| {
                let mut row = FormField::new(field.label(), self.display_value(field))
                    .disabled(self.is_disabled(field))
                    .with_error(self.errors.get(field));
                if field.kind() == FieldKind::Choice {
                    row = row.choice();
                }
                if !field.is_validated() {
                    row = row.optional();
                }
                row
            })
            .collect();
        Form::new(fields, self.focus.index())
    }

    fn edit(&mut self, field: Field, value: String) {
        self.record = self.record.set_field(field, value);
        log::debug!("edited {field}");
    }

    fn move_focus(&mut self, forward: bool) {
        self.focus = cycle(Field::all(), self.focus, forward);
    }

    fn handle_char(&mut self, ch: char) {
        if self.focus.kind() == FieldKind::Choice {
            return;
        }
        let mut value = self.record.get(self.focus).to_string();
        value.push(ch);
        self.edit(self.focus, value);
    }

    fn delete_char(&mut self) {
        if self.focus.kind() == FieldKind::Choice {
            return;
        }
        let mut value = self.record.get(self.focus).to_string();
        if value.pop().is_some() {
            self.edit(self.focus, value);
        }
    }

    /// Cycles the focused choice field forward or backward, wrapping around.
    fn cycle_choice(&mut self, forward: bool) {
        let field = self.focus;
        if field.kind() != FieldKind::Choice || self.is_disabled(field) {
            return;
        }
        let options = self.options(field);
        if options.is_empty() {
            return;
        }
        let next = cycle(options.as_slice(), self.record.get(field), forward).to_string();
        self.edit(field, next);
    }

    /// Validates every field and either reports errors or hands off a payload.
    fn submit(&mut self) -> Action {
        match self.engine.try_submit(&self.record) {
            Ok(payload) => {
                self.errors = ValidationResult::default();
                Action::Submit(payload)
            }
            Err(errors) => {
                self.errors = errors;
                Action::None
            }
        }
    }
}

impl ScreenState for RegistrationState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Right => {
                self.cycle_choice(true);
                Action::None
            }
            KeyCode::Left => {
                self.cycle_choice(false);
                Action::None
            }
            KeyCode::F(2) => {
                self.show_password = !self.show_password;
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.handle_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_registration(state: &RegistrationState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = state.form();
    let [form_area, _gap, toggle_area, submit_area, status_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(form.height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    draw_form(&form, frame, form_area);

    let checkbox = if state.show_password() { "[x]" } else { "[ ]" };
    let toggle = Paragraph::new(format!("{checkbox} Show Password"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(toggle, toggle_area);

    let submit = if state.is_form_valid() {
        Line::from(Span::styled(
            "[ Submit ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("[ Submit ]", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "  complete all fields to enable",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(submit), submit_area);

    draw_status_bar(&state.status_context(), frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  \u{2190}/\u{2192}: choose  F2: show password  Enter: submit  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
