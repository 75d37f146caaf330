//! Form widget: one line per field with label, value and inline error.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 16;

/// A single row within a [`Form`], already prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown to the left of the input.
    pub label: String,
    /// Text to render as the value (masked or placeholder where relevant).
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked as required.
    pub required: bool,
    /// Choice fields render with `<`/`>` arrows instead of a cursor.
    pub choice: bool,
    /// Disabled fields are dimmed and never show a cursor.
    pub disabled: bool,
}

impl FormField {
    /// Creates a required text field showing `value`.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: None,
            required: true,
            choice: false,
            disabled: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn choice(mut self) -> Self {
        self.choice = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }
}

/// A list of rows with one focused row.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a form with focus on `focus`, clamped to the last row.
    pub fn new(fields: Vec<FormField>, focus: usize) -> Self {
        let focus = focus.min(fields.len().saturating_sub(1));
        Self { fields, focus }
    }

    /// Returns the index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns a reference to the rows.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns `true` if any row has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Number of lines [`draw_form`] needs.
    pub fn height(&self) -> u16 {
        u16::try_from(self.fields.len()).unwrap_or(u16::MAX)
    }
}

fn field_line(field: &FormField, is_focused: bool) -> Line<'_> {
    let label_color = if field.error.is_some() {
        Color::Red
    } else if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let value_style = if field.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let mut spans = vec![Span::styled(
        format!("{label:<width$}", width = LABEL_WIDTH),
        Style::default().fg(label_color),
    )];

    if field.choice {
        spans.push(Span::styled("< ", value_style));
        spans.push(Span::styled(field.value.as_str(), value_style));
        spans.push(Span::styled(" >", value_style));
    } else {
        spans.push(Span::styled(field.value.as_str(), value_style));
        if is_focused && !field.disabled {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    if let Some(ref err) = field.error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(err.as_str(), Style::default().fg(Color::Red)));
    }

    Line::from(spans)
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form.fields.iter().map(|_| Constraint::Length(1)).collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let paragraph = Paragraph::new(field_line(field, i == form.focus));
        frame.render_widget(paragraph, rows[i]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_form(focus: usize) -> Form {
        Form::new(
            vec![
                FormField::new("First Name", "Asha"),
                FormField::new("Country", "India").choice(),
                FormField::new("Phone Code", "+91").choice().optional(),
            ],
            focus,
        )
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn focus_is_clamped() {
        assert_eq!(make_form(99).focus(), 2);
    }

    #[test]
    fn empty_form_focus_is_zero() {
        assert_eq!(Form::new(vec![], 5).focus(), 0);
    }

    #[test]
    fn height_is_one_line_per_field() {
        assert_eq!(make_form(0).height(), 3);
    }

    #[test]
    fn has_errors_reflects_rows() {
        assert!(!make_form(0).has_errors());
        let form = Form::new(
            vec![FormField::new("Email", "x").with_error(Some("Valid email is required"))],
            0,
        );
        assert!(form.has_errors());
    }

    #[test]
    fn required_label_gets_star() {
        let text = line_text(&field_line(&FormField::new("Email", ""), false));
        assert!(text.starts_with("Email *"));
    }

    #[test]
    fn optional_label_has_no_star() {
        let field = FormField::new("Phone Code", "+91").optional();
        assert!(!line_text(&field_line(&field, false)).contains('*'));
    }

    #[test]
    fn focused_text_field_shows_cursor() {
        let text = line_text(&field_line(&FormField::new("Email", "a@"), true));
        assert!(text.contains("a@\u{2588}"));
    }

    #[test]
    fn disabled_field_shows_no_cursor() {
        let field = FormField::new("Email", "").disabled(true);
        assert!(!line_text(&field_line(&field, true)).contains('\u{2588}'));
    }

    #[test]
    fn choice_field_shows_arrows() {
        let field = FormField::new("Country", "India").choice();
        assert!(line_text(&field_line(&field, true)).contains("< India >"));
    }

    #[test]
    fn error_is_rendered_after_value() {
        let field = FormField::new("Pan", "bad").with_error(Some("Valid PAN format required"));
        let text = line_text(&field_line(&field, false));
        assert!(text.ends_with("bad  Valid PAN format required"));
    }

    #[test]
    fn draws_every_row() {
        let form = make_form(0);
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal
            .draw(|frame| draw_form(&form, frame, frame.area()))
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("First Name"));
        assert!(output.contains("< India >"));
        assert!(output.contains("< +91 >"));
    }
}
