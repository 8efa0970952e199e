// Roster viewer widget: one team's picks grouped by position.
//
// Header line shows per-position counts; each position then lists its
// players in draft order, or "No players drafted".

use mockdraft_core::draft::player::Position;
use mockdraft_core::draft::roster::Roster;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{focus_border, position_color};
use crate::tui::ViewState;

/// Render the viewed team's roster into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let team = state.roster_team;
    let mut title = format!("Roster: {}", state.team_name(team));
    if state.is_user_team(team) {
        title.push_str(" (You)");
    }
    if state.num_teams() > 0 {
        title.push_str(&format!(" [{}/{}]", team, state.num_teams()));
    }

    let roster = team
        .checked_sub(1)
        .and_then(|i| state.snapshot.rosters.get(i as usize));
    let lines = match roster {
        Some(roster) => roster_lines(roster),
        None => vec![Line::from(Span::styled(
            "  No roster",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(title),
    );
    frame.render_widget(paragraph, area);
}

/// Count header followed by one section per position.
pub fn roster_lines(roster: &Roster) -> Vec<Line<'_>> {
    let mut lines = vec![count_line(roster), Line::raw("")];

    for pos in Position::ALL {
        lines.push(Line::from(Span::styled(
            pos.display_str(),
            Style::default()
                .fg(position_color(pos))
                .add_modifier(Modifier::BOLD),
        )));
        let mut any = false;
        for player in roster.at_position(pos) {
            any = true;
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(player.name.as_str()),
                Span::styled(
                    format!("  {}", player.matchup()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        if !any {
            lines.push(Line::from(Span::styled(
                "  No players drafted",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}

/// "QB 1  RB 2  WR 0  TE 0"
fn count_line(roster: &Roster) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (pos, count)) in roster.position_counts().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            pos.display_str(),
            Style::default().fg(position_color(pos)),
        ));
        spans.push(Span::raw(format!(" {count}")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{buffer_text, sample_view};
    use mockdraft_core::config::{Config, DataPaths, DraftConfig, LeagueConfig};
    use mockdraft_core::draft::player::Player;
    use mockdraft_core::draft::state::DraftState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    /// Roster for team 1 after it drafts a QB and a WR in a two-team draft.
    fn drafted_roster() -> Roster {
        let config = Config {
            league: LeagueConfig {
                name: "Two".into(),
                num_teams: 2,
                num_rounds: 2,
                user_team: 1,
                team_names: vec!["A".into(), "B".into()],
            },
            draft: DraftConfig::default(),
            data: DataPaths::default(),
        };
        let players = vec![
            Player::new("Josh Allen", Position::Quarterback, "BUF", "ARI"),
            Player::new("Bijan Robinson", Position::RunningBack, "ATL", "PIT"),
            Player::new("Breece Hall", Position::RunningBack, "NYJ", "SF"),
            Player::new("Puka Nacua", Position::WideReceiver, "LAR", "DET"),
        ];
        let mut draft = DraftState::new(config.league.draft_settings(), players).unwrap();
        for name in ["Josh Allen", "Bijan Robinson", "Breece Hall", "Puka Nacua"] {
            draft.draft(name);
        }
        draft.roster(1).unwrap().clone()
    }

    #[test]
    fn empty_roster_lines() {
        let roster = Roster::new();
        let lines = roster_lines(&roster);
        assert_eq!(line_text(&lines[0]), "QB 0  RB 0  WR 0  TE 0");
        let empties = lines
            .iter()
            .filter(|l| line_text(l) == "  No players drafted")
            .count();
        assert_eq!(empties, 4);
    }

    #[test]
    fn drafted_roster_groups_by_position() {
        let roster = drafted_roster();
        let lines = roster_lines(&roster);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts[0], "QB 1  RB 0  WR 1  TE 0");
        assert_eq!(texts[2], "QB");
        assert_eq!(texts[3], "  Josh Allen  BUF vs ARI");
        assert_eq!(texts[4], "RB");
        assert_eq!(texts[5], "  No players drafted");
        assert!(texts.contains(&"  Puka Nacua  LAR vs DET".to_string()));
    }

    #[test]
    fn render_title_marks_user_team() {
        let backend = TestBackend::new(50, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = sample_view();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        let top = text.lines().next().unwrap();
        assert!(top.contains("Roster: Bees (You) [2/4]"), "{top}");
    }

    #[test]
    fn render_does_not_panic_without_snapshot() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }
}
