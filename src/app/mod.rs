//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, CAMERA_ERROR_MESSAGE};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::TrainerConfig;
use crate::error::{Result, TrainerError};
use crate::frames::{FrameSource, TickSource};
use crate::present::{PresentationSink, Status, StatusEvent};
use crate::scramble::ScrambleEngine;
use crate::session::{Captured, SolveSession};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App<S: FrameSource = TickSource> {
    state: AppState,
    config: TrainerConfig,
    /// Reused for every scramble this window shows
    engine: ScrambleEngine,
    session: SolveSession,
    source: S,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App<TickSource> {
    /// Create a new application instance timing solves from the system clock
    pub fn new(config: TrainerConfig) -> Result<Self> {
        Self::with_source(config, TickSource::new())
    }
}

impl<S: FrameSource> App<S> {
    /// Create an application reading frames from `source`
    pub fn with_source(config: TrainerConfig, source: S) -> Result<Self> {
        info!(?config, "creating app");
        let engine = match config.seed {
            Some(seed) => ScrambleEngine::seeded(seed),
            None => ScrambleEngine::new(),
        };
        let state = AppState {
            show_explanations: config.show_explanations,
            ..AppState::default()
        };

        let mut app = Self {
            state,
            config,
            engine,
            session: SolveSession::new(),
            source,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        };
        app.new_scramble()?;
        Ok(app)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &SolveSession {
        &self.session
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Replace the scramble on display
    pub fn new_scramble(&mut self) -> Result<()> {
        let (scramble, explanations) = self
            .engine
            .generate_with_explanation(self.config.scramble_length)?;
        self.state.present_scramble(&scramble, &explanations)
    }

    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    pub fn toggle_explanations(&mut self) {
        self.state.show_explanations = !self.state.show_explanations;
    }

    pub fn toggle_camera(&mut self) -> Result<()> {
        if self.session.is_camera_running() {
            let outcome = self.session.stop_camera();
            self.state.present_status(StatusEvent::Camera(Status::Stopped))?;
            if let Some(outcome) = outcome {
                self.state
                    .present_status(StatusEvent::Recording(Status::Stopped))?;
                self.state.present_outcome(&outcome)?;
            }
        } else {
            self.session.start_camera();
            self.state.present_status(StatusEvent::Camera(Status::Started))?;
        }
        Ok(())
    }

    pub fn toggle_recording(&mut self) -> Result<()> {
        if let Some(outcome) = self.session.stop_recording() {
            self.state
                .present_status(StatusEvent::Recording(Status::Stopped))?;
            return self.state.present_outcome(&outcome);
        }

        match self.session.start_recording() {
            Ok(()) => self
                .state
                .present_status(StatusEvent::Recording(Status::Started)),
            Err(TrainerError::State(reason)) => {
                debug!(%reason, "recording not started");
                self.state.status_message = "Start the camera first (press c)".to_string();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Poll one frame and refresh the live timer
    pub fn tick(&mut self) -> Result<()> {
        let captured = match self.session.capture(&mut self.source) {
            Ok(captured) => captured,
            Err(e) => {
                warn!(error = %e, "frame source failed");
                let outcome = self.session.stop_camera();
                self.state.present_status(StatusEvent::Camera(Status::Error))?;
                if let Some(outcome) = outcome {
                    self.state.present_outcome(&outcome)?;
                }
                return Ok(());
            }
        };

        match captured {
            Captured::Idle => {}
            Captured::Frame(_) => {
                if self.session.is_recording() {
                    self.state.elapsed = self.session.recorded_duration();
                    self.state.frames = self.session.recorded_frames();
                }
            }
            Captured::Closed(outcome) => {
                self.state.present_status(StatusEvent::Camera(Status::Stopped))?;
                if let Some(outcome) = outcome {
                    self.state
                        .present_status(StatusEvent::Recording(Status::Stopped))?;
                    self.state.present_outcome(&outcome)?;
                }
            }
        }
        Ok(())
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action =
            self.keybinding_context
                .action_for(&self.state.mode, key.code, key.modifiers);

        // While help is open, ? and Esc close it and everything else is ignored
        if self.state.help_visible {
            if matches!(action, Some(KeyAction::Help))
                || key.code == crossterm::event::KeyCode::Esc
            {
                self.toggle_help();
            }
            return Ok(false);
        }

        match action {
            Some(KeyAction::NewScramble) => self.new_scramble()?,
            Some(KeyAction::ToggleCamera) => self.toggle_camera()?,
            Some(KeyAction::ToggleRecording) => self.toggle_recording()?,
            Some(KeyAction::ToggleExplanations) => self.toggle_explanations(),
            Some(KeyAction::Help) => self.toggle_help(),
            Some(KeyAction::Quit) => {
                info!("quit requested");
                return Ok(true);
            }
            None => {}
        }
        Ok(false)
    }

    /// Main loop: input, frame polling, drawing
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");
        let interval = self.config.frame_interval();

        loop {
            if crossterm::event::poll(interval)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key(key_event)? {
                        break;
                    }
                }
            }

            self.tick()?;

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;
        }

        // Finish a solve in progress so the log records it
        if let Some(outcome) = self.session.stop_camera() {
            info!(outcome = %outcome.render_text(), "solve interrupted by quit");
        }
        Ok(())
    }
}
