//! Application state definitions
//!
//! `AppState` is everything the renderer needs. It is also the terminal
//! shell's [`PresentationSink`], so the app drives it through the same calls
//! a network relay would receive.

use std::time::Duration;

use crate::analysis::SolveOutcome;
use crate::error::Result;
use crate::present::{PresentationSink, Status, StatusEvent};
use crate::scramble::Scramble;

/// Shown when the frame source fails to start or dies
pub const CAMERA_ERROR_MESSAGE: &str =
    "Could not start the camera. Check that it is connected and not in use by another application.";

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppMode {
    /// Scramble shown, waiting for the user to start a solve
    #[default]
    Scramble,
    /// Timing a solve
    Recording,
    /// Solve finished, showing time and suggestions
    Analysis,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Scramble on display
    pub scramble: Scramble,
    /// One explanation per scramble move
    pub explanations: Vec<String>,
    /// Whether the explanation panel is visible
    pub show_explanations: bool,
    /// Whether frames are being captured
    pub camera_running: bool,
    /// Time recorded so far in the current solve
    pub elapsed: Duration,
    /// Frames captured in the current solve
    pub frames: usize,
    /// Result of the last finished recording
    pub outcome: Option<SolveOutcome>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Scramble,
            scramble: Scramble::default(),
            explanations: Vec::new(),
            show_explanations: true,
            camera_running: false,
            elapsed: Duration::ZERO,
            frames: 0,
            outcome: None,
            status_message: "Press c to start the camera, Space to time a solve".to_string(),
            help_visible: false,
        }
    }
}

impl PresentationSink for AppState {
    fn present_scramble(&mut self, scramble: &Scramble, explanations: &[String]) -> Result<()> {
        self.scramble = scramble.clone();
        self.explanations = explanations.to_vec();
        if self.mode == AppMode::Analysis {
            self.mode = AppMode::Scramble;
            self.outcome = None;
        }
        self.status_message = format!("New {}-move scramble", scramble.len());
        Ok(())
    }

    fn present_status(&mut self, event: StatusEvent) -> Result<()> {
        match event {
            StatusEvent::Camera(Status::Started) => {
                self.camera_running = true;
                self.status_message = "Camera started".to_string();
            }
            StatusEvent::Camera(Status::Stopped) => {
                self.camera_running = false;
                self.status_message = "Camera stopped".to_string();
            }
            StatusEvent::Camera(Status::Error) => {
                self.camera_running = false;
                self.status_message = CAMERA_ERROR_MESSAGE.to_string();
            }
            StatusEvent::Recording(Status::Started) => {
                self.mode = AppMode::Recording;
                self.elapsed = Duration::ZERO;
                self.frames = 0;
                self.outcome = None;
                self.status_message = "Recording... press Space when solved".to_string();
            }
            StatusEvent::Recording(Status::Stopped | Status::Error) => {
                if self.mode == AppMode::Recording {
                    self.mode = AppMode::Scramble;
                }
                self.status_message = "Recording stopped".to_string();
            }
        }
        Ok(())
    }

    fn present_outcome(&mut self, outcome: &SolveOutcome) -> Result<()> {
        if let Some(analysis) = outcome.analysis() {
            self.elapsed = analysis.duration;
            self.status_message = format!("Solved in {} seconds", analysis.solve_time);
        } else {
            self.status_message = outcome.render_text();
        }
        self.outcome = Some(outcome.clone());
        self.mode = AppMode::Analysis;
        Ok(())
    }
}
