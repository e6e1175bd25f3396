use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};
use sudoku_engine::CellFlags;

use crate::game::{Game, Phase};

// ── Constants ────────────────────────────────────────────────────────────────

/// Each cell occupies 3 characters of width.
/// Total width = 9*3 + 4 thick borders + 6 thin borders = 37
const GRID_WIDTH: u16 = 37;

/// 9 cell rows, plus 4 thick horizontal lines + 6 thin = 19
const GRID_HEIGHT: u16 = 19;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    draw_playing(f, game);

    if game.phase == Phase::Finished {
        draw_finished(f, game);
    }
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    let main_area = outer[0];
    let bottom_area = outer[1];

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH + 2),
        Constraint::Length(2),
        Constraint::Length(22),
        Constraint::Min(0),
    ])
    .split(main_area);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT + 2),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);

    let panel_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(8),
        Constraint::Min(0),
    ])
    .split(h_chunks[3]);

    draw_info_panel(f, game, panel_v[1]);

    draw_key_hints(f, bottom_area);
}

// ── Grid rendering ───────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_HEIGHT as usize);

    for visual_row in 0..GRID_HEIGHT {
        let mut spans: Vec<Span> = Vec::new();

        match classify_row(visual_row) {
            RowKind::ThickBorder(border_idx) => {
                spans.push(thick_horizontal_line(border_idx));
            }
            RowKind::ThinBorder => {
                spans.push(thin_horizontal_line());
            }
            RowKind::CellRow(grid_row) => {
                for seg in 0..19 {
                    match classify_col(seg) {
                        ColKind::ThickBorder => {
                            spans.push(Span::styled("║", Style::default().fg(Color::White)));
                        }
                        ColKind::ThinBorder => {
                            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                        }
                        ColKind::Cell(grid_col) => {
                            spans.push(cell_span(game, grid_row, grid_col));
                        }
                    }
                }
            }
        }

        lines.push(Line::from(spans));
    }

    let block = Block::bordered()
        .title(" Sudoku ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let grid_paragraph = Paragraph::new(lines).block(block);
    f.render_widget(grid_paragraph, area);
}

/// Render a single cell (3 chars wide) with flag-based styling: hints
/// bold white, player digits cyan, wrong entries red, selection yellow.
fn cell_span(game: &Game, row: usize, col: usize) -> Span<'static> {
    let value = game.board.value(row, col);
    let flags = game.board.flags_at(row, col);
    let is_selected = row == game.selected_row && col == game.selected_col;
    let is_error = flags.contains(CellFlags::ERROR);
    let is_hint = flags.contains(CellFlags::HINT);

    let bg = if is_selected { Color::Yellow } else { Color::Reset };

    let text = if value != 0 {
        format!(" {} ", value)
    } else if is_selected {
        " · ".to_string()
    } else {
        "   ".to_string()
    };

    let style = if is_error {
        Style::default()
            .fg(Color::Red)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else if is_hint {
        let fg = if is_selected { Color::Black } else { Color::White };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    } else {
        let fg = if is_selected { Color::Black } else { Color::Cyan };
        Style::default().fg(fg).bg(bg)
    };

    Span::styled(text, style)
}

// ── Row/column classification helpers ────────────────────────────────────────

enum RowKind {
    ThickBorder(u8),
    ThinBorder,
    /// grid_row 0-8
    CellRow(usize),
}

/// Map visual row (0..19) to its kind.
///
/// Layout per box-section (6 rows): thick border, then three cell rows
/// separated by thin borders. Final thick border at row 18.
fn classify_row(visual: u16) -> RowKind {
    match visual {
        0 => RowKind::ThickBorder(0),
        6 => RowKind::ThickBorder(1),
        12 => RowKind::ThickBorder(2),
        18 => RowKind::ThickBorder(3),
        v if v % 2 == 1 => RowKind::CellRow((v / 2) as usize),
        _ => RowKind::ThinBorder,
    }
}

enum ColKind {
    ThickBorder,
    ThinBorder,
    Cell(usize),
}

/// Map visual column segment (0..19) to its kind — thick borders at box
/// boundaries, thin between cells.
fn classify_col(seg: usize) -> ColKind {
    match seg {
        0 | 6 | 12 | 18 => ColKind::ThickBorder,
        s if s % 2 == 1 => ColKind::Cell((s - 1) / 2),
        _ => ColKind::ThinBorder,
    }
}

/// Build a thick horizontal border line (═ with junctions). 3 chars per cell.
fn thick_horizontal_line(border_idx: u8) -> Span<'static> {
    let (left, thick_cross, thin_cross, right) = match border_idx {
        0 => ('╔', '╦', '╤', '╗'),
        3 => ('╚', '╩', '╧', '╝'),
        _ => ('╠', '╬', '╪', '╣'),
    };

    let mut s = String::with_capacity(40);
    s.push(left);
    for box_idx in 0..3 {
        for cell_idx in 0..3 {
            s.push_str("═══");
            if cell_idx < 2 {
                s.push(thin_cross);
            }
        }
        if box_idx < 2 {
            s.push(thick_cross);
        }
    }
    s.push(right);

    Span::styled(s, Style::default().fg(Color::White))
}

/// Build a thin horizontal border line (─ with junctions). 3 chars per cell.
fn thin_horizontal_line() -> Span<'static> {
    let mut s = String::with_capacity(40);
    s.push('║');
    for box_idx in 0..3 {
        for cell_idx in 0..3 {
            s.push_str("───");
            if cell_idx < 2 {
                s.push('┼');
            }
        }
        if box_idx < 2 {
            s.push('║');
        }
    }
    s.push('║');

    Span::styled(s, Style::default().fg(Color::DarkGray))
}

// ── Info panel ───────────────────────────────────────────────────────────────

fn draw_info_panel(f: &mut Frame, game: &Game, area: Rect) {
    let block = Block::bordered()
        .title(" Info ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let errors = game.error_count();

    let lines = vec![
        Line::from(vec![
            Span::styled(" Hints:      ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", game.hints), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Cells left: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", game.board.cells_left()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Errors:     ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", errors),
                Style::default().fg(if errors > 0 { Color::Red } else { Color::White }),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::styled(" Place  ", Style::default().fg(Color::Gray)),
        Span::styled("0/Del", Style::default().fg(Color::Yellow)),
        Span::styled(" Erase  ", Style::default().fg(Color::Gray)),
        Span::styled("n", Style::default().fg(Color::Yellow)),
        Span::styled(" New game  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Finished screen ──────────────────────────────────────────────────────────

fn draw_finished(f: &mut Frame, game: &Game) {
    let area = f.area();

    let popup = center_rect(40, 9, area);
    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Solved! ")
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Green));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "PUZZLE COMPLETE",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Solved with {} hints revealed", game.hints),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter for new game, Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}
