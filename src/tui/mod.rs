// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placecard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placecard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal viewer for rendered seating plans (ratatui + crossterm).
//!
//! One table per page; mouse motion drives the per-table hover model, and the
//! tooltip is drawn as an overlay that takes no part in hit-testing.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Context, Rectangle},
        Block, Borders, Clear, Paragraph, Wrap,
    },
};

mod theme;

use crate::hover::{hit_test, HoverModel};
use crate::layout::{TableOutline, TABLE_SIZE};
use crate::model::{GuestDirectory, SeatingPlan, TableShapes, Weights};
use crate::render::{render_plan, ScenePrimitive, TableScene};
use crate::score::metrics_summary;
use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const EMPTY_STATE: &str = "No seating plan available. Generate a plan to see the layout.";

/// The built-in sample event, for `--demo`.
pub fn demo_inputs() -> (SeatingPlan, GuestDirectory, TableShapes) {
    (
        crate::model::fixtures::demo_plan(),
        crate::model::fixtures::demo_directory(),
        crate::model::fixtures::demo_shapes(),
    )
}

/// Runs the interactive viewer until the user quits.
pub fn run(
    plan: &SeatingPlan,
    directory: &GuestDirectory,
    shapes: &TableShapes,
    weights: &Weights,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(plan, directory, shapes, weights, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    scenes: Vec<TableScene>,
    summary: Vec<String>,
    hover: HoverModel,
    theme: TuiTheme,
    selected: usize,
    metrics_visible: bool,
    should_quit: bool,
    // Inner canvas area of the current table panel, recorded at draw time so
    // mouse positions can be mapped back into table-local space.
    canvas_area: Option<Rect>,
}

impl App {
    fn new(
        plan: &SeatingPlan,
        directory: &GuestDirectory,
        shapes: &TableShapes,
        weights: &Weights,
        theme: TuiTheme,
    ) -> Self {
        Self {
            scenes: render_plan(plan, directory, shapes),
            summary: metrics_summary(plan, weights),
            hover: HoverModel::new(),
            theme,
            selected: 0,
            metrics_visible: true,
            should_quit: false,
            canvas_area: None,
        }
    }

    fn selected_scene(&self) -> Option<&TableScene> {
        self.scenes.get(self.selected)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.select_offset(-1),
            KeyCode::Right | KeyCode::Char('l') => self.select_offset(1),
            KeyCode::Char('m') => self.metrics_visible = !self.metrics_visible,
            _ => {}
        }
    }

    fn select_offset(&mut self, delta: isize) {
        let count = self.scenes.len();
        if count < 2 {
            return;
        }

        // The page being left can no longer be hovered.
        if let Some(scene) = self.selected_scene() {
            let table_id = scene.table_id().clone();
            self.hover.pointer_leave(&table_id);
        }

        self.selected = (self.selected as isize + delta).rem_euclid(count as isize) as usize;
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.on_pointer_at(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Maps a terminal cell to table-local coordinates and updates hover.
    fn on_pointer_at(&mut self, column: u16, row: u16) {
        let Some(area) = self.canvas_area else {
            return;
        };
        let Some(scene) = self.scenes.get(self.selected) else {
            return;
        };
        let table_id = scene.table_id().clone();

        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height
            && area.width > 0
            && area.height > 0;
        if !inside {
            self.hover.pointer_leave(&table_id);
            return;
        }

        let x = (f64::from(column - area.x) + 0.5) / f64::from(area.width) * TABLE_SIZE;
        let y = (f64::from(row - area.y) + 0.5) / f64::from(area.height) * TABLE_SIZE;

        match hit_test(scene, x, y) {
            Some(target) => self.hover.pointer_enter(&table_id, target),
            None => self.hover.pointer_leave(&table_id),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = rows[0];
    let footer_area = rows[1];

    draw_footer(frame, footer_area);

    if app.scenes.is_empty() {
        app.canvas_area = None;
        let empty = Paragraph::new(EMPTY_STATE)
            .style(app.theme.caption_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, main_area);
        return;
    }

    let (table_area, metrics_area) = if app.metrics_visible {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    draw_table_panel(frame, app, table_area);

    if let Some(metrics_area) = metrics_area {
        draw_metrics_panel(frame, app, metrics_area);
    }

    draw_tooltip_overlay(frame, app);
}

fn draw_table_panel(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let Some(scene) = app.scenes.get(app.selected).cloned() else {
        return;
    };

    let position = format!("{}/{}", app.selected + 1, app.scenes.len());
    let title = format!(
        "{} · {}",
        scene.caption().title(),
        scene.caption().subtitle()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(title, app.theme.text_style()))
        .title(Line::styled(position, app.theme.caption_style()).alignment(Alignment::Right));

    let inner = block.inner(area);
    app.canvas_area = Some(inner);

    // Character cell width in table-local units, for centering labels.
    let cell_width = if inner.width > 0 {
        TABLE_SIZE / f64::from(inner.width)
    } else {
        TABLE_SIZE
    };

    let theme = app.theme.clone();
    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, TABLE_SIZE])
        .y_bounds([0.0, TABLE_SIZE])
        .paint(move |ctx| paint_scene(ctx, &scene, &theme, cell_width));
    frame.render_widget(canvas, area);
}

fn paint_scene(ctx: &mut Context<'_>, scene: &TableScene, theme: &TuiTheme, cell_width: f64) {
    // Scene y grows downward; the canvas y axis grows upward.
    let flip = |y: f64| TABLE_SIZE - y;

    for primitive in scene.primitives() {
        match primitive {
            ScenePrimitive::Outline {
                outline, stroke, ..
            } => match *outline {
                TableOutline::Circle { center, radius } => {
                    ctx.draw(&Circle {
                        x: center.x,
                        y: flip(center.y),
                        radius,
                        color: theme.resolve(*stroke),
                    });
                }
                TableOutline::RoundedRect {
                    origin,
                    width,
                    height,
                    ..
                } => {
                    // Corner rounding is below terminal resolution.
                    ctx.draw(&Rectangle {
                        x: origin.x,
                        y: flip(origin.y + height),
                        width,
                        height,
                        color: theme.resolve(*stroke),
                    });
                }
            },
            ScenePrimitive::SeatMarker { center, radius, fill, .. } => {
                ctx.draw(&Circle {
                    x: center.x,
                    y: flip(center.y),
                    radius: *radius,
                    color: theme.resolve(*fill),
                });
            }
            ScenePrimitive::Label {
                anchor,
                text,
                color,
            } => {
                let offset = text.chars().count() as f64 / 2.0 * cell_width;
                ctx.print(
                    anchor.x - offset,
                    flip(anchor.y),
                    Line::styled(
                        text.clone(),
                        Style::default().fg(theme.resolve(*color)),
                    ),
                );
            }
        }
    }
}

fn draw_metrics_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = app
        .summary
        .iter()
        .map(|line| Line::styled(line.clone(), app.theme.text_style()))
        .collect::<Vec<_>>();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::styled("Solver metrics", app.theme.text_style())),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn draw_tooltip_overlay(frame: &mut Frame<'_>, app: &App) {
    let Some(scene) = app.selected_scene() else {
        return;
    };
    let Some(info) = app.hover.hover(scene.table_id()) else {
        return;
    };
    let Some(area) = app.canvas_area else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let anchor = info.overlay_anchor();
    let to_cell = |value: f64, span: u16| {
        ((value / TABLE_SIZE) * f64::from(span))
            .floor()
            .min(f64::from(span - 1)) as u16
    };
    let anchor_col = area.x + to_cell(anchor.x, area.width);
    let anchor_row = area.y + to_cell(anchor.y, area.height);

    let frame_area = frame.size();
    let lines = info.tooltip().lines().collect::<Vec<_>>();
    let text_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = (text_width as u16 + 2).min(frame_area.width);
    let height = (lines.len() as u16 + 2).min(frame_area.height);

    // Horizontally centered on the anchor, raised above it, clamped on-screen.
    let x = anchor_col
        .saturating_sub(width / 2)
        .min(frame_area.width.saturating_sub(width));
    let y = anchor_row
        .saturating_sub(height)
        .min(frame_area.height.saturating_sub(height));
    let overlay = Rect::new(x, y, width, height);

    let tooltip_lines = lines
        .into_iter()
        .map(|line| Line::styled(line.to_owned(), app.theme.tooltip_style()))
        .collect::<Vec<_>>();

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(tooltip_lines).block(Block::default().borders(Borders::ALL)),
        overlay,
    );
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(FOOTER_KEY_COLOR)),
            Span::styled(" ", Style::default()),
            Span::styled(label, Style::default().fg(FOOTER_LABEL_COLOR)),
            Span::styled("  ", Style::default()),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(hint("←/→", "table"));
    spans.extend(hint("m", "metrics"));
    spans.extend(hint("q", "quit"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}
