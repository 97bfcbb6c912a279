/// Globe renderer: pure drawing, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

use crate::config::GRATICULE_STEP_DEG;
use crate::games::globe::game::GlobeGame;
use crate::games::globe::state::GuessResult;
use crate::geo::{ColorHint, Coordinate, Orthographic};

/// Sampling step along graticule lines, in degrees
const SEGMENT_DEG: f64 = 3.0;
const GLOBE_MARGIN: f64 = 1.1;

pub fn render(frame: &mut Frame, game: &GlobeGame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);

    render_globe(frame, cols[0], game);
    render_panel(frame, cols[1], game);

    frame.render_widget(
        Paragraph::new("[Enter] Guess  [←↑↓→] Rotate  [Tab] Spin  [Esc] Quit")
            .alignment(Alignment::Center),
        rows[1],
    );
}

fn hint_color(hint: ColorHint) -> Color {
    let (r, g, b) = hint.to_rgb();
    Color::Rgb(r, g, b)
}

/// Polyline through `points`, broken wherever it crosses to the far side.
fn visible_segments(view: &Orthographic, points: impl Iterator<Item = Coordinate>) -> Vec<((f64, f64), (f64, f64))> {
    let mut segments = Vec::new();
    let mut prev: Option<(f64, f64)> = None;
    for c in points {
        let cur = view.project(c);
        if let (Some(a), Some(b)) = (prev, cur) {
            segments.push((a, b));
        }
        prev = cur;
    }
    segments
}

fn graticule(view: &Orthographic) -> Vec<((f64, f64), (f64, f64))> {
    let steps = |from: f64, to: f64| {
        let n = ((to - from) / SEGMENT_DEG).round() as usize;
        (0..=n).map(move |i| from + i as f64 * SEGMENT_DEG)
    };

    let mut lines = Vec::new();
    let mut lon = -180.0;
    while lon < 180.0 {
        lines.extend(visible_segments(view, steps(-90.0, 90.0).map(|lat| Coordinate::from_degrees(lon, lat))));
        lon += GRATICULE_STEP_DEG;
    }
    let mut lat = -90.0 + GRATICULE_STEP_DEG;
    while lat < 90.0 {
        lines.extend(visible_segments(view, steps(-180.0, 180.0).map(|lon| Coordinate::from_degrees(lon, lat))));
        lat += GRATICULE_STEP_DEG;
    }
    lines
}

fn render_globe(frame: &mut Frame, area: Rect, game: &GlobeGame) {
    let view = game.view();

    // terminal cells are about twice as tall as wide; keep the globe round
    let inner_h = f64::from(area.height.saturating_sub(2).max(1));
    let inner_w = f64::from(area.width.saturating_sub(2).max(1));
    let y_range = GLOBE_MARGIN;
    let x_range = (y_range * inner_w / (2.0 * inner_h)).max(GLOBE_MARGIN);

    let stars: Vec<(f64, f64)> = game
        .stars()
        .iter()
        .map(|&(x, y)| (x * x_range, y * y_range))
        .filter(|&(x, y)| x * x + y * y > 1.0)
        .collect();

    let countries: Vec<(f64, f64)> = game
        .distance_game()
        .catalog()
        .iter()
        .filter_map(|c| view.project(c.coordinate()))
        .collect();

    let grid = graticule(view);

    let canvas = Canvas::default()
        .block(Block::default().title(" GLOBE ").borders(Borders::ALL))
        .marker(symbols::Marker::Braille)
        .x_bounds([-x_range, x_range])
        .y_bounds([-y_range, y_range])
        .paint(|ctx| {
            ctx.draw(&Points { coords: &stars, color: Color::Gray });
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: 1.0, color: Color::DarkGray });
            for &((x1, y1), (x2, y2)) in &grid {
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color: Color::DarkGray });
            }
            ctx.draw(&Points { coords: &countries, color: Color::Blue });
            ctx.layer();

            for marker in game.markers() {
                let Some((x, y)) = view.project(marker.point.coordinate()) else {
                    continue;
                };
                let (color, symbol) = match (marker.is_target, marker.hint) {
                    (true, _) => (Color::Yellow, "★"),
                    (false, Some(hint)) => (hint_color(hint), "●"),
                    (false, None) => (Color::White, "○"),
                };
                ctx.print(x, y, Span::styled(format!("{} {}", symbol, marker.name), Style::default().fg(color)));
            }
        });

    frame.render_widget(canvas, area);
}

fn render_panel(frame: &mut Frame, area: Rect, game: &GlobeGame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    let dg = game.distance_game();

    let status = if dg.is_active() {
        format!("Score: {}   Guesses: {}", dg.score(), dg.history().len())
    } else {
        format!("Score: {}   Target: {}", dg.score(), dg.target().name())
    };
    frame.render_widget(
        Paragraph::new(status).block(Block::default().title(" DISTANCE ").borders(Borders::ALL)),
        chunks[0],
    );

    let items: Vec<ListItem> = dg
        .history()
        .iter()
        .rev()
        .map(|r| {
            ListItem::new(format!("{} is about {:.0} kilometers away.", r.name, r.distance_km))
                .style(Style::default().fg(hint_color(r.color_hint)))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().title(" GUESSED ").borders(Borders::ALL)),
        chunks[1],
    );

    let feedback = match game.last_result() {
        Some(result) => {
            let style = match result {
                GuessResult::Invalid { .. } | GuessResult::Duplicate { .. } => Style::default().fg(Color::Red),
                GuessResult::Correct { .. } | GuessResult::GameOver { .. } => {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                }
                GuessResult::Accepted { color_hint, .. } => Style::default().fg(hint_color(*color_hint)),
            };
            Line::from(Span::styled(result.to_string(), style))
        }
        None => Line::from("Which country is hidden? Type a name and press Enter."),
    };
    frame.render_widget(
        Paragraph::new(feedback).wrap(Wrap { trim: true }).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    let (title, input) = if dg.is_active() {
        (" GUESS ", game.current_input().to_string())
    } else {
        (" ROUND OVER ", "Press Enter for a new round".to_string())
    };
    let input_area = chunks[3];
    frame.render_widget(
        Paragraph::new(input).block(Block::default().title(title).borders(Borders::ALL)),
        input_area,
    );

    if dg.is_active() {
        let typed = u16::try_from(game.current_input().chars().count()).unwrap_or(u16::MAX);
        let x = input_area.x.saturating_add(1).saturating_add(typed).min(input_area.right().saturating_sub(2));
        frame.set_cursor_position((x, input_area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::geo::CountryCatalog;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn graticule_skips_the_far_side() {
        let view = Orthographic::default();
        for ((x1, y1), (x2, y2)) in graticule(&view) {
            assert!(x1 * x1 + y1 * y1 <= 1.0 + 1e-9);
            assert!(x2 * x2 + y2 * y2 <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn draws_score_and_prompt() {
        let config = GameConfig { seed: Some(9), target: Some("Nepal".into()), ..GameConfig::default() };
        let game = GlobeGame::new(CountryCatalog::load().unwrap(), &config).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &game)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Score: 0"));
        assert!(text.contains("GUESS"));
    }

    #[test]
    fn long_input_keeps_the_cursor_inside_the_box() {
        use crate::core::game::{Context, Game};
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let config = GameConfig { seed: Some(9), target: Some("Nepal".into()), ..GameConfig::default() };
        let mut game = GlobeGame::new(CountryCatalog::load().unwrap(), &config).unwrap();
        let (ctx, _rx) = Context::channel();
        for _ in 0..70_000 {
            game.handle_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE), &ctx);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| render(f, &game)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 60);
    }
}
