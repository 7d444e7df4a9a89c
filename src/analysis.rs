//! Post-solve analysis
//!
//! There is no move recognition: the analysis is the measured solve time plus
//! a fixed list of practice suggestions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Practice suggestions shown after every solve
pub const SUGGESTIONS: [&str; 3] = [
    "Practice F2L lookahead to reduce pauses",
    "Consider learning advanced PLL algorithms",
    "Work on finger tricks for faster execution",
];

/// Message shown when a recording ends without any captured frames
pub const NO_SOLVE_MESSAGE: &str = "No solve recorded!";

/// Timed solve with suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveAnalysis {
    /// Seconds with two decimals, e.g. "12.34"
    pub solve_time: String,
    pub suggestions: Vec<String>,
    #[serde(skip)]
    pub duration: Duration,
}

impl SolveAnalysis {
    /// Multi-line text block for display
    pub fn render_text(&self) -> String {
        let mut text = format!("Solve Time: {} seconds\nSuggestions:", self.solve_time);
        for tip in &self.suggestions {
            text.push_str("\n- ");
            text.push_str(tip);
        }
        text
    }
}

/// Result of stopping a recording
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Solved(SolveAnalysis),
    /// The recording captured no frames
    NoSolveRecorded,
}

impl SolveOutcome {
    pub fn render_text(&self) -> String {
        match self {
            SolveOutcome::Solved(analysis) => analysis.render_text(),
            SolveOutcome::NoSolveRecorded => NO_SOLVE_MESSAGE.to_string(),
        }
    }

    pub fn analysis(&self) -> Option<&SolveAnalysis> {
        match self {
            SolveOutcome::Solved(analysis) => Some(analysis),
            SolveOutcome::NoSolveRecorded => None,
        }
    }
}

/// Build the analysis for a solve that took `solve_time`
pub fn analyze_solve(solve_time: Duration) -> SolveAnalysis {
    SolveAnalysis {
        solve_time: format_seconds(solve_time),
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        duration: solve_time,
    }
}

/// Format a duration as seconds with two decimals
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}
