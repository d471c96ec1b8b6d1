use crate::app::AppState;
use crate::domain::{long_date, DayView};
use crate::persistence::KeyValueStore;
use crate::report::calculate_day_stats;
use crate::ui::{
    day_pane::render_day_pane,
    layout::create_history_layout,
    styles::{border_style, default_style, selected_style, title_style},
};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the finished-days list with the selected day's breakdown beside it
pub fn render_history_pane<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let (list_area, details_area) = create_history_layout(area);
    let days = app.ledger.data().days_newest_first();

    let items: Vec<ListItem> = days
        .iter()
        .map(|day| ListItem::new(Span::styled(format!(" {}", long_date(&day.date)), default_style())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" History ", title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if !days.is_empty() {
        state.select(Some(app.history_index.min(days.len() - 1)));
    }
    f.render_stateful_widget(list, list_area, &mut state);

    if let Some(day) = app.selected_history_day() {
        let stats = calculate_day_stats(DayView {
            tasks: &day.tasks,
            breaks: &day.breaks,
        });
        render_day_pane(f, details_area, &long_date(&day.date), &stats);
    }
}
