use super::field_line;
use crate::app::AppState;
use crate::app::layout::{Column, TableGeometry};
use crate::plan::RowRef;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

const HEADER_HEIGHT: u16 = 1;

/// Draws the two-column table plus the trailing blank anchor row, and
/// records where rows and columns landed for pointer hit-testing.
pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Plans ")
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);

    let [plan_col, file_col] = Layout::horizontal([Constraint::Percentage(70), Constraint::Fill(1)])
        .spacing(1)
        .areas(inner);

    let drop_target = state.drag.target();
    let rows: Vec<Row> = state
        .plan_list
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut style = Style::default().fg(theme.foreground);
            if drop_target == Some(RowRef::Entry(i)) {
                style = style.bg(theme.drop_target_bg);
            }
            Row::new(vec![
                Cell::from(entry.text.as_str()),
                Cell::from(Span::styled(
                    entry.file_label(),
                    Style::default().fg(theme.file_column),
                )),
            ])
            .style(style)
        })
        .chain(std::iter::once(anchor_row(state)))
        .collect();

    let header = Row::new(vec!["Plan", "File"]).style(
        Style::default()
            .fg(theme.header)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(plan_col.width),
            Constraint::Length(file_col.width),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1)
    .row_highlight_style(Style::default().bg(theme.selected_bg));

    state.table_state.select(state.selected);
    f.render_stateful_widget(table, area, &mut state.table_state);

    let rows_area = Rect {
        y: inner.y + HEADER_HEIGHT.min(inner.height),
        height: inner.height.saturating_sub(HEADER_HEIGHT),
        ..inner
    };
    state.table = TableGeometry {
        rows: rows_area,
        plan_column: Rect {
            y: rows_area.y,
            height: rows_area.height,
            ..plan_col
        },
        file_column: Rect {
            y: rows_area.y,
            height: rows_area.height,
            ..file_col
        },
        offset: state.table_state.offset(),
    };

    render_inline_edit(f, state);
}

/// The anchor is drawn in the background color on both sides so it reads
/// as empty space, except while it is the drop target.
fn anchor_row(state: &AppState) -> Row<'static> {
    let bg = if state.drag.target() == Some(RowRef::Anchor) {
        state.theme.drop_target_bg
    } else {
        state.theme.background
    };
    Row::new(vec![Cell::from(""), Cell::from("")])
        .style(Style::default().fg(state.theme.background).bg(bg))
}

fn render_inline_edit(f: &mut Frame, state: &AppState) {
    let Some(edit) = &state.inline_edit else {
        return;
    };
    let Some(cell) = state.table.cell_rect(edit.entry, Column::Plan) else {
        return;
    };

    let style = Style::default()
        .bg(state.theme.edit_bg)
        .fg(state.theme.edit_fg);
    f.render_widget(Clear, cell);
    f.render_widget(
        Paragraph::new(field_line(&edit.field, cell.width, style)).style(style),
        cell,
    );
}
