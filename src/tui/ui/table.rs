use crate::cards::Card;
use crate::round::{CardView, Phase, RoundView, Winner};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let view = app.round.view();
    let size = f.area();
    let status_height: u16 = 3 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(5),                // computer hand
            Constraint::Min(5),                // player hand
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header: phase, draw pile and exchange counter
    let drop_style = if view.drop_enabled {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::raw(format!("{}   Remaining: {}   ", view.phase.label(), view.remaining)),
        Span::styled(format!("Drop ({}/{})", view.exchanges_used, view.max_exchanges), drop_style),
    ]))
    .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let computer_title = if app.revealing() { "Computer Hand (revealing)" } else { "Computer Hand" };
    draw_hand(f, chunks[1], computer_title, &view.computer, None);
    draw_hand(f, chunks[2], "Player Hand", &view.player, Some(app.focus));

    draw_status(f, chunks[3], app, &view);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_hand(f: &mut Frame, area: Rect, title: &str, cards: &[CardView], focus: Option<usize>) {
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    if cards.is_empty() {
        return;
    }
    let slots = columns(inner(area), cards.len());
    for (i, (cv, slot)) in cards.iter().zip(slots.iter()).enumerate() {
        let border = if cv.selected {
            Some(Color::Blue)
        } else if focus == Some(i) {
            Some(Color::Yellow)
        } else {
            None
        };
        let label = focus.map(|_| format!("{}", i + 1));
        render_card_widget(f, *slot, cv, border, label);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState, view: &RoundView) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left: Vec<Line> = Vec::new();
    match (view.winner, view.phase) {
        (Some(winner), _) => {
            let color = match winner {
                Winner::Player => Color::Green,
                Winner::Computer => Color::Red,
            };
            left.push(Line::from(Span::styled(
                format!("{winner} Wins!"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }
        (None, Phase::Revealing) => left.push(Line::from("Revealing computer cards…")),
        (None, _) => left.push(Line::from("Select cards with 1-4 / Space, D to drop, R to reveal.")),
    }
    if !view.result_message.is_empty() {
        left.push(Line::from(view.result_message.clone()));
    }
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right = vec![
        Line::from("D drop • R reveal"),
        Line::from("N reset • X exit"),
        Line::from("? help"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 1-4: select / unselect card"),
        Line::from("- Left / Right: move cursor"),
        Line::from("- Space: select / unselect card under cursor"),
        Line::from("- D: drop selected cards (3 per round)"),
        Line::from("- R: reveal computer hand"),
        Line::from("- N: new round"),
        Line::from("- X / Esc: back to start screen"),
        Line::from(""),
        Line::from(Span::styled("Start screen:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start game"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn card_span(c: Card) -> Span<'static> {
    let style = if c.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(c.to_string(), style.add_modifier(Modifier::BOLD))
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    cv: &CardView,
    border: Option<Color>,
    label: Option<String>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(l) = label {
        block = block.title(l);
    }
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if cv.face_up {
        Line::from(card_span(cv.card))
    } else {
        Line::from(Span::styled("▒▒▒", Style::default().fg(Color::Red)))
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
