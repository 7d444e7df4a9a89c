//! Per-session camera and recording state
//!
//! Each connected user or open window owns one [`SolveSession`]. Nothing here
//! is global, so any number of sessions can run side by side.

use std::time::Duration;
use tracing::{debug, info};

use crate::analysis::{analyze_solve, SolveOutcome};
use crate::error::{Result, TrainerError};
use crate::frames::{Frame, FrameSource};

/// Whether the frame source is being polled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone, Default)]
struct Recording {
    first: Option<Duration>,
    last: Option<Duration>,
    frames: usize,
}

impl Recording {
    fn record(&mut self, timestamp: Duration) {
        self.first.get_or_insert(timestamp);
        self.last = Some(timestamp);
        self.frames += 1;
    }

    fn finish(self) -> SolveOutcome {
        match (self.first, self.last) {
            (Some(first), Some(last)) => {
                SolveOutcome::Solved(analyze_solve(last.saturating_sub(first)))
            }
            _ => SolveOutcome::NoSolveRecorded,
        }
    }
}

/// What a single [`SolveSession::capture`] call produced
#[derive(Debug, Clone, PartialEq)]
pub enum Captured {
    /// The camera is stopped; the source was not polled
    Idle,
    Frame(Frame),
    /// The source closed and the camera stopped, finishing any recording
    Closed(Option<SolveOutcome>),
}

/// Camera and recording state for one user
#[derive(Debug, Clone, Default)]
pub struct SolveSession {
    camera: CameraState,
    recording: Option<Recording>,
}

impl SolveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera_state(&self) -> CameraState {
        self.camera
    }

    pub fn is_camera_running(&self) -> bool {
        self.camera == CameraState::Running
    }

    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// Frames captured by the current recording
    pub fn recorded_frames(&self) -> usize {
        self.recording.as_ref().map_or(0, |r| r.frames)
    }

    /// Time between the first and latest frame of the current recording
    pub fn recorded_duration(&self) -> Duration {
        match self.recording.as_ref() {
            Some(Recording {
                first: Some(first),
                last: Some(last),
                ..
            }) => last.saturating_sub(*first),
            _ => Duration::ZERO,
        }
    }

    pub fn start_camera(&mut self) {
        if self.camera == CameraState::Stopped {
            info!("camera started");
            self.camera = CameraState::Running;
        }
    }

    /// Stop the camera, finishing any recording in progress
    pub fn stop_camera(&mut self) -> Option<SolveOutcome> {
        let outcome = self.stop_recording();
        if self.camera == CameraState::Running {
            info!("camera stopped");
            self.camera = CameraState::Stopped;
        }
        outcome
    }

    /// Begin timing a solve. Does nothing if a recording is already running.
    pub fn start_recording(&mut self) -> Result<()> {
        if !self.is_camera_running() {
            return Err(TrainerError::state("camera is not running"));
        }
        if self.recording.is_none() {
            info!("recording started");
            self.recording = Some(Recording::default());
        }
        Ok(())
    }

    /// Finish the current recording. Returns `None` when nothing was recording.
    pub fn stop_recording(&mut self) -> Option<SolveOutcome> {
        let recording = self.recording.take()?;
        info!(frames = recording.frames, "recording stopped");
        Some(recording.finish())
    }

    /// Pull one frame from `source` while the camera runs
    pub fn capture<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> Result<Captured> {
        if !self.is_camera_running() {
            return Ok(Captured::Idle);
        }

        match source.next_frame()? {
            Some(frame) => {
                if let Some(recording) = self.recording.as_mut() {
                    recording.record(frame.timestamp);
                }
                Ok(Captured::Frame(frame))
            }
            None => {
                debug!("frame source closed");
                Ok(Captured::Closed(self.stop_camera()))
            }
        }
    }
}
