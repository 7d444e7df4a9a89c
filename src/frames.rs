//! Frame sources
//!
//! The trainer never talks to camera hardware directly. Anything that can hand
//! out timestamped frames implements [`FrameSource`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::error::Result;

/// A captured image with the time it was taken, relative to its source's start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub timestamp: Duration,
    /// Encoded image bytes; empty for sources without real video
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(timestamp: Duration, data: Vec<u8>) -> Self {
        Self { timestamp, data }
    }

    /// Frame with no image payload
    pub fn empty(timestamp: Duration) -> Self {
        Self::new(timestamp, Vec::new())
    }
}

/// Something that yields frames on demand
pub trait FrameSource {
    /// Next frame, or `None` once the source has closed
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Clock-driven source producing empty frames
///
/// Stands in for a webcam when only solve timing is needed.
#[derive(Debug, Clone)]
pub struct TickSource {
    started: Instant,
}

impl TickSource {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the source was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for TickSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        Ok(Some(Frame::empty(self.started.elapsed())))
    }
}

/// Replays a fixed list of frames, then closes
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Frame>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Empty frames at the given millisecond offsets
    pub fn from_millis(offsets: &[u64]) -> Self {
        Self::new(
            offsets
                .iter()
                .map(|ms| Frame::empty(Duration::from_millis(*ms))),
        )
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ScriptedSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_then_closes() {
        let mut source = ScriptedSource::from_millis(&[0, 30, 60]);
        assert_eq!(source.remaining(), 3);
        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.timestamp, Duration::ZERO);
        assert!(first.data.is_empty());
        source.next_frame().unwrap();
        let last = source.next_frame().unwrap().unwrap();
        assert_eq!(last.timestamp, Duration::from_millis(60));
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_tick_source_is_monotonic() {
        let mut source = TickSource::new();
        let a = source.next_frame().unwrap().unwrap();
        let b = source.next_frame().unwrap().unwrap();
        assert!(b.timestamp >= a.timestamp);
    }
}
