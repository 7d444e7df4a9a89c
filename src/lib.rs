//! Cube Trainer Library
//!
//! Rubik's Cube scramble generation, solve timing and the terminal trainer
//! built on top of them.

pub mod analysis;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod frames;
pub mod present;
pub mod scramble;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use analysis::{analyze_solve, SolveAnalysis, SolveOutcome, SUGGESTIONS};
pub use config::TrainerConfig;
pub use error::{Result, TrainerError};
pub use frames::{Frame, FrameSource, ScriptedSource, TickSource};
pub use present::{JsonLinesSink, PresentationSink, ServerMessage, Status, StatusEvent};
pub use scramble::{explain_move, Scramble, ScrambleEngine, DEFAULT_SCRAMBLE_LENGTH};
pub use session::{CameraState, Captured, SolveSession};
pub use types::{Face, Modifier, Move};
