//! Presentation sinks and wire messages
//!
//! A [`PresentationSink`] is whatever shows the trainer's output to a user: the
//! terminal UI, or a writer relaying JSON messages to a browser client.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::analysis::{SolveAnalysis, SolveOutcome};
use crate::error::Result;
use crate::scramble::Scramble;

/// Status reported for the camera and the recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Started,
    Stopped,
    Error,
}

/// State change worth telling the user about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    Camera(Status),
    Recording(Status),
}

/// Messages sent to clients, one JSON object each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerMessage {
    Scramble {
        scramble: Scramble,
        explanations: Vec<String>,
    },
    CameraStatus {
        status: Status,
    },
    RecordingStatus {
        status: Status,
    },
    SolveAnalysis(SolveAnalysis),
    NoSolve {
        message: String,
    },
}

impl ServerMessage {
    pub fn scramble(scramble: &Scramble, explanations: &[String]) -> Self {
        Self::Scramble {
            scramble: scramble.clone(),
            explanations: explanations.to_vec(),
        }
    }

    pub fn outcome(outcome: &SolveOutcome) -> Self {
        match outcome {
            SolveOutcome::Solved(analysis) => Self::SolveAnalysis(analysis.clone()),
            SolveOutcome::NoSolveRecorded => Self::NoSolve {
                message: outcome.render_text(),
            },
        }
    }
}

impl From<StatusEvent> for ServerMessage {
    fn from(event: StatusEvent) -> Self {
        match event {
            StatusEvent::Camera(status) => Self::CameraStatus { status },
            StatusEvent::Recording(status) => Self::RecordingStatus { status },
        }
    }
}

/// Displays or forwards trainer output
pub trait PresentationSink {
    fn present_scramble(&mut self, scramble: &Scramble, explanations: &[String]) -> Result<()>;

    fn present_status(&mut self, event: StatusEvent) -> Result<()>;

    fn present_outcome(&mut self, outcome: &SolveOutcome) -> Result<()>;
}

/// Writes each message as one line of JSON
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn send(&mut self, message: &ServerMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn present_scramble(&mut self, scramble: &Scramble, explanations: &[String]) -> Result<()> {
        self.send(&ServerMessage::scramble(scramble, explanations))
    }

    fn present_status(&mut self, event: StatusEvent) -> Result<()> {
        self.send(&ServerMessage::from(event))
    }

    fn present_outcome(&mut self, outcome: &SolveOutcome) -> Result<()> {
        self.send(&ServerMessage::outcome(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_solve;
    use serde_json::Value;
    use std::time::Duration;

    fn lines(sink: JsonLinesSink<Vec<u8>>) -> Vec<Value> {
        let bytes = sink.into_inner();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_scramble_message_shape() {
        let scramble: Scramble = "R U' F2".parse().unwrap();
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.present_scramble(&scramble, &scramble.explanations())
            .unwrap();

        let messages = lines(sink);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["event"], "scramble");
        assert_eq!(messages[0]["scramble"], "R U' F2");
        assert_eq!(messages[0]["explanations"][1], "Upper face counterclockwise");
    }

    #[test]
    fn test_status_and_outcome_messages() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.present_status(StatusEvent::Camera(Status::Started))
            .unwrap();
        sink.present_status(StatusEvent::Recording(Status::Stopped))
            .unwrap();
        sink.present_outcome(&SolveOutcome::Solved(analyze_solve(Duration::from_secs(9))))
            .unwrap();
        sink.present_outcome(&SolveOutcome::NoSolveRecorded).unwrap();

        let messages = lines(sink);
        assert_eq!(messages[0]["event"], "camera_status");
        assert_eq!(messages[0]["status"], "started");
        assert_eq!(messages[1]["event"], "recording_status");
        assert_eq!(messages[1]["status"], "stopped");
        assert_eq!(messages[2]["event"], "solve_analysis");
        assert_eq!(messages[2]["solve_time"], "9.00");
        assert_eq!(messages[3]["event"], "no_solve");
        assert_eq!(messages[3]["message"], "No solve recorded!");
    }

    #[test]
    fn test_message_deserializes() {
        let json = r#"{"event":"scramble","scramble":"D2 B","explanations":["Down face 180 degrees","Back face clockwise"]}"#;
        let message: ServerMessage = serde_json::from_str(json).unwrap();
        match message {
            ServerMessage::Scramble { scramble, explanations } => {
                assert_eq!(scramble.len(), 2);
                assert_eq!(explanations, scramble.explanations());
            }
            other => panic!("Expected scramble message, got {:?}", other),
        }
    }
}
