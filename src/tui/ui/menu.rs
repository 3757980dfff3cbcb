use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 70, size);
    let block = Block::default().title("draw-poker").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo = r#"
 ___                   ___     _
|   \ _ _ __ ___ __ __| _ \___| |_____ _ _
| |) | '_/ _` \ V  V /|  _/ _ \ / / -_) '_|
|___/|_| \__,_|\_/\_/ |_| \___/_\_\___|_|
"#;
    let suits = Line::from(vec![
        Span::styled("♠ ", Style::default().fg(Color::White)),
        Span::styled("♥ ", Style::default().fg(Color::Red)),
        Span::styled("♣ ", Style::default().fg(Color::White)),
        Span::styled("♦", Style::default().fg(Color::Red)),
    ]);
    let mut logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();
    logo_lines.push(suits);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let hints = [
        String::from("[Enter] Start Game  [Q] Quit"),
        String::from("[↑/↓] Move  [+/-] Adjust"),
    ];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Settings:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    if let Some(err) = app.action_error() {
        cfg_lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
