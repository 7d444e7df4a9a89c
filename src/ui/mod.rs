//! User interface rendering module
//!
//! One screen, stacked top to bottom: title, scramble, explanations (optional),
//! timer with camera status, solve analysis, status line and nav bar.

use crate::analysis::{format_seconds, SolveOutcome};
use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Renders the trainer screen
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the full screen for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let explanation_height = if state.show_explanations {
            Constraint::Min(6)
        } else {
            Constraint::Length(0)
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // title
                Constraint::Length(4), // scramble
                explanation_height,
                Constraint::Length(3), // timer
                Constraint::Length(7), // analysis
                Constraint::Length(1), // status
                Constraint::Length(1), // nav bar
            ])
            .split(f.area());

        render_title(f, chunks[0]);
        render_scramble(f, chunks[1], state);
        if state.show_explanations {
            render_explanations(f, chunks[2], state);
        }
        render_timer(f, chunks[3], state);
        render_analysis(f, chunks[4], state);
        render_status(f, chunks[5], &state.status_message);
        render_nav_bar(f, chunks[6], state, keybinding_ctx);

        if state.help_visible {
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, f.area());
        }
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Rubik's Cube Trainer")
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

fn render_scramble(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::with_capacity(state.scramble.len() * 2);
    for mv in &state.scramble {
        spans.push(Span::styled(mv.to_string(), Theme::face_style(mv.face)));
        spans.push(Span::raw(" "));
    }

    let widget = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(format!(" Scramble ({} moves) ", state.scramble.len()))
                .borders(Borders::ALL)
                .border_style(Theme::border(state.mode != AppMode::Recording)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_explanations(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .explanations
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Styles::text_muted()),
                Span::styled(text.clone(), Styles::text_secondary()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Move explanations ")
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(widget, area);
}

fn render_timer(f: &mut Frame, area: Rect, state: &AppState) {
    let recording = state.mode == AppMode::Recording;
    let camera = if state.camera_running {
        Span::styled("camera on", Styles::success())
    } else {
        Span::styled("camera off", Styles::text_muted())
    };
    let mut spans = vec![
        Span::styled(
            format!("{} s", format_seconds(state.elapsed)),
            Styles::timer(recording),
        ),
        Span::raw("   "),
        camera,
    ];
    if recording {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("● REC", Styles::error()));
        spans.push(Span::styled(
            format!(" {} frames", state.frames),
            Styles::text_muted(),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Timer ").borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_analysis(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = match &state.outcome {
        Some(SolveOutcome::Solved(analysis)) => analysis
            .render_text()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 { Styles::header() } else { Styles::text() };
                Line::from(Span::styled(line.to_string(), style))
            })
            .collect(),
        Some(SolveOutcome::NoSolveRecorded) => vec![Line::from(Span::styled(
            SolveOutcome::NoSolveRecorded.render_text(),
            Styles::warning(),
        ))],
        None => vec![Line::from(Span::styled(
            "Finish a solve to see its analysis",
            Styles::text_muted(),
        ))],
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Analysis ")
                .borders(Borders::ALL)
                .border_style(Theme::border(state.mode == AppMode::Analysis)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(message.to_string())
        .style(Styles::warning())
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_nav_bar(f: &mut Frame, area: Rect, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode) {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::key_hint()));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_solve;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let ctx = KeybindingContext::new();
        terminal
            .draw(|f| UiRenderer::new().render(f, state, &ctx))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_scramble_and_explanations() {
        let scramble: crate::scramble::Scramble = "R U' F2".parse().unwrap();
        let state = AppState {
            explanations: scramble.explanations(),
            scramble,
            ..Default::default()
        };
        let screen = render_to_string(&state);
        assert!(screen.contains("R U' F2"));
        assert!(screen.contains("Front face 180 degrees"));
        assert!(screen.contains("Scramble (3 moves)"));
    }

    #[test]
    fn test_renders_analysis() {
        let state = AppState {
            mode: AppMode::Analysis,
            outcome: Some(SolveOutcome::Solved(analyze_solve(Duration::from_secs(42)))),
            ..Default::default()
        };
        let screen = render_to_string(&state);
        assert!(screen.contains("Solve Time: 42.00 seconds"));
        assert!(screen.contains("Practice F2L lookahead"));
    }

    #[test]
    fn test_renders_help_overlay() {
        let state = AppState {
            help_visible: true,
            ..Default::default()
        };
        let screen = render_to_string(&state);
        assert!(screen.contains("Cube Trainer Help"));
    }
}
