//! Rendering of the task list.
//!
//! Both renderers are pure functions of the store state plus the view-local
//! selection, so redrawing after every `send` is always consistent.

use crate::input::{Focus, ViewState};
use crate::types::{Task, TodoState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::fmt::Write as _;

/// Window title
pub const TITLE: &str = "Todo List";
/// Shown in the input line while pending input is empty
pub const PLACEHOLDER: &str = "Add a new task";

const ADD_LABEL: &str = "[Add Todo]";
const KEY_HINTS: &str = "Tab focus · Enter add/toggle · d delete · Esc quit";

/// Label of the toggle control for a task
#[must_use]
pub const fn toggle_label(task: &Task) -> &'static str {
    if task.completed { "Undo" } else { "Complete" }
}

/// Summary line shown under the list
#[must_use]
pub fn summary(state: &TodoState) -> String {
    format!("Completed Tasks: {}", state.completed_count())
}

/// Draw the whole screen
pub fn render(frame: &mut Frame, state: &TodoState, view: &ViewState) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {TITLE} "))
        .title_style(Style::default().fg(Color::Indexed(63)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, list_area, summary_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_input(frame, input_area, state, view);
    render_list(frame, list_area, state, view);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            summary(state),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        summary_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        hint_area,
    );
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Indexed(63))
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_input(frame: &mut Frame, area: Rect, state: &TodoState, view: &ViewState) {
    let focused = view.focus == Focus::Input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title_bottom(Line::from(ADD_LABEL).right_aligned());

    let text = if state.pending_input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.pending_input.as_str())
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let width = u16::try_from(state.pending_input.chars().count()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn task_line(task: &Task, width: u16) -> Line<'_> {
    let (marker, text_style, row_tint) = if task.completed {
        (
            "✓",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            Color::Green,
        )
    } else {
        ("·", Style::default(), Color::Red)
    };
    let toggle_color = if task.completed { Color::Yellow } else { Color::Green };

    let controls = format!("[{}] [Delete]", toggle_label(task));
    let used = 3 + task.text.chars().count() + controls.chars().count();
    let padding = usize::from(width).saturating_sub(used).max(1);

    Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(row_tint)),
        Span::styled(task.text.as_str(), text_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            format!("[{}]", toggle_label(task)),
            Style::default().fg(toggle_color),
        ),
        Span::raw(" "),
        Span::styled("[Delete]", Style::default().fg(Color::Red)),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, state: &TodoState, view: &ViewState) {
    let focused = view.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused));
    let width = block.inner(area).width;

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| ListItem::new(task_line(task, width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    if focused && !state.tasks.is_empty() {
        list_state.select(Some(view.selected));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Plain-text rendering, used by script mode
#[must_use]
pub fn render_plain(state: &TodoState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    if state.pending_input.is_empty() {
        let _ = writeln!(out, "> ({PLACEHOLDER}) {ADD_LABEL}");
    } else {
        let _ = writeln!(out, "> {} {ADD_LABEL}", state.pending_input);
    }
    for task in &state.tasks {
        let mark = if task.completed { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] {:>3}  {}  [{}] [Delete]",
            task.id.get(),
            task.text,
            toggle_label(task)
        );
    }
    let _ = writeln!(out, "{}", summary(state));
    out
}
