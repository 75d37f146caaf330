//! Status bar widget: one-line form progress display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Validated fields that currently pass.
    pub completed: usize,
    /// Validated fields in total.
    pub total: usize,
    /// Whether the whole form is valid.
    pub ready: bool,
}

/// Builds the status bar text.
///
/// - Ready:     `10/10 fields  READY` (READY in Green)
/// - Not ready: `7/10 fields  incomplete`
fn status_spans(ctx: &StatusBarContext) -> Vec<Span<'static>> {
    let cyan = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled(
        format!("{}/{} fields  ", ctx.completed, ctx.total),
        cyan,
    )];
    if ctx.ready {
        spans.push(Span::styled("READY", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled("incomplete", Style::default().fg(Color::DarkGray)));
    }
    spans
}

/// Renders the status bar. Renders nothing for an empty context.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.total == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(Line::from(status_spans(ctx))), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

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

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_ready() {
        let ctx = StatusBarContext {
            completed: 10,
            total: 10,
            ready: true,
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("10/10 fields"));
        assert!(output.contains("READY"));
    }

    #[test]
    fn renders_incomplete() {
        let ctx = StatusBarContext {
            completed: 7,
            total: 10,
            ready: false,
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("7/10 fields"));
        assert!(output.contains("incomplete"));
        assert!(!output.contains("READY"));
    }

    #[test]
    fn renders_nothing_for_empty_context() {
        let output = render_status_bar(&StatusBarContext::default(), 40, 1);
        assert_eq!(output.trim(), "");
    }
}
