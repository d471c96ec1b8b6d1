use crate::app::AppState;
use crate::domain::{long_date, UiMode};
use crate::persistence::KeyValueStore;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_box(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the day changed modal (offers to roll over into the new day)
pub fn render_day_changed_modal<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if app.ui_mode != UiMode::DayChanged {
        return;
    }

    let lines = vec![
        Line::raw(""),
        Line::raw("  A new day has begun!"),
        Line::raw(""),
        Line::raw(format!(
            "  Time recorded so far belongs to {}.",
            long_date(&app.ledger.data().current_day)
        )),
        Line::raw("  Rolling over saves running timers to that day first."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [r]", modal_title_style()),
            Span::raw(" Roll over now  "),
            Span::styled("[q]", modal_title_style()),
            Span::raw(" Quit"),
        ]),
    ];

    render_box(f, area, " \u{1F305} Day Changed ", lines);
}

/// Render the alert modal
pub fn render_alert_modal<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let Some(message) = &app.alert else {
        return;
    };

    let mut lines = vec![Line::raw("")];
    lines.extend(message.lines().map(|line| Line::raw(format!("  {}", line))));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" OK"),
    ]));

    render_box(f, area, " Optimus Time ", lines);
}
