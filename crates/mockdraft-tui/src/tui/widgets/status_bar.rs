// Status bar widget: pick counter, round, team on the clock, last notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [league] [pick counter] [round] [on the clock] [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.snapshot.league_name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    spans.push(separator());
    spans.extend(progress_spans(state));

    if let Some(ref notice) = state.notice {
        spans.push(separator());
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::Gray))
}

/// Pick/round/on-the-clock spans, or "Draft complete" once over.
pub fn progress_spans(state: &ViewState) -> Vec<Span<'static>> {
    let snap = &state.snapshot;
    if snap.total_picks == 0 {
        return vec![Span::styled(
            "Loading draft...",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let (Some(round), Some(team)) = (snap.current_round, snap.current_team) else {
        return vec![Span::styled(
            format!("Draft complete ({} picks)", snap.total_picks),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )];
    };

    let mut spans = vec![
        Span::styled(
            format!("Pick {}/{}", snap.current_pick, snap.total_picks),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(
            format!("Round {}/{}", round, snap.num_rounds),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled("On the clock: ", Style::default().fg(Color::Gray)),
    ];

    if state.is_user_team(team) {
        spans.push(Span::styled(
            format!("{} (You)", state.team_name(team)),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            state.team_name(team),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
