use crate::domain::View;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current view
pub fn render_keybindings(f: &mut Frame, area: Rect, view: View, has_history: bool) {
    let mut hints = match view {
        View::Timer => vec![
            Span::raw(" a task   "),
            Span::raw("Enter start/pause   "),
            Span::raw("r reset   "),
            Span::raw("+/- min   "),
            Span::raw("b break   "),
            Span::raw("R reset break   "),
            Span::raw("[/] break min   "),
            Span::raw("e end day   "),
        ],
        View::Summary => vec![Span::raw(" n new day   "), Span::raw("Esc continue working   ")],
        View::History => vec![Span::raw(" ↑/↓ select day   "), Span::raw("Esc back to timer   ")],
    };

    if has_history && view != View::History {
        hints.push(Span::raw("h history   "));
    }
    hints.push(Span::raw("q quit"));

    let paragraph = Paragraph::new(Line::from(hints)).style(hint_style());
    f.render_widget(paragraph, area);
}
