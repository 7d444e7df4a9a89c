//! Scramble generation
//!
//! [`ScrambleEngine`] draws random moves and rejects any move that turns the
//! same face, or the opposite face, as the move before it.
//!
//! # Length policy
//!
//! Lengths are `usize`, so negative lengths cannot be expressed. A length of
//! zero yields an empty scramble rather than an error.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{Result, TrainerError};
use crate::types::{Face, Modifier, Move};

/// Number of moves in a scramble when the caller does not say otherwise
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Consecutive rejected draws tolerated before giving up on a move.
///
/// At least 12 of the 18 candidate moves are acceptable at every step, so a
/// uniform source never gets close to this. Hitting it means the source is
/// degenerate.
pub const MAX_DRAWS_PER_MOVE: usize = 1000;

/// An ordered sequence of moves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Scramble {
    moves: Vec<Move>,
}

impl Scramble {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Check that no move turns the same or the opposite face as its predecessor
    pub fn is_valid(&self) -> bool {
        self.moves
            .windows(2)
            .all(|pair| pair[0].face.can_precede(pair[1].face))
    }

    /// One explanation per move, index-aligned with [`Scramble::moves`]
    pub fn explanations(&self) -> Vec<String> {
        self.moves.iter().map(explain_move).collect()
    }

    /// Move tokens, e.g. `["R", "U'", "F2"]`
    pub fn tokens(&self) -> Vec<String> {
        self.moves.iter().map(Move::to_string).collect()
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

impl FromStr for Scramble {
    type Err = TrainerError;

    /// Parse whitespace-separated move tokens. Adjacency is not enforced here;
    /// use [`Scramble::is_valid`] for that.
    fn from_str(s: &str) -> Result<Self> {
        let moves = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>>>()?;
        Ok(Self { moves })
    }
}

impl From<Scramble> for String {
    fn from(scramble: Scramble) -> Self {
        scramble.to_string()
    }
}

impl TryFrom<String> for Scramble {
    type Error = TrainerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl<'a> IntoIterator for &'a Scramble {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Describe a single move, e.g. "Upper face counterclockwise"
pub fn explain_move(mv: &Move) -> String {
    mv.explain()
}

/// Constrained-random scramble generator
///
/// The only state kept between calls is the random source. The face of the
/// last accepted move lives inside each [`generate`](Self::generate) call, so
/// an engine can be shared across requests or created fresh for each one.
#[derive(Debug, Clone)]
pub struct ScrambleEngine<R = StdRng> {
    rng: R,
}

impl ScrambleEngine<StdRng> {
    /// Engine seeded from operating system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed seed; the same seed yields the same scrambles
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ScrambleEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ScrambleEngine<R> {
    /// Engine drawing from an arbitrary random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `length` moves where no move turns the same or the opposite
    /// face as the move before it.
    pub fn generate(&mut self, length: usize) -> Result<Scramble> {
        let mut moves = Vec::with_capacity(length);
        let mut last_face: Option<Face> = None;

        while moves.len() < length {
            let mv = self.next_move(last_face)?;
            last_face = Some(mv.face);
            moves.push(mv);
        }

        let scramble = Scramble::new(moves);
        debug!(length, scramble = %scramble, "generated scramble");
        Ok(scramble)
    }

    /// Generate a scramble along with one explanation per move
    pub fn generate_with_explanation(&mut self, length: usize) -> Result<(Scramble, Vec<String>)> {
        let scramble = self.generate(length)?;
        let explanations = scramble.explanations();
        Ok((scramble, explanations))
    }

    fn next_move(&mut self, last_face: Option<Face>) -> Result<Move> {
        for _ in 0..MAX_DRAWS_PER_MOVE {
            let face = Face::ALL[self.rng.gen_range(0..Face::ALL.len())];
            let modifier = Modifier::ALL[self.rng.gen_range(0..Modifier::ALL.len())];

            match last_face {
                Some(last) if !last.can_precede(face) => continue,
                _ => return Ok(Move::new(face, modifier)),
            }
        }

        warn!(
            draws = MAX_DRAWS_PER_MOVE,
            ?last_face,
            "random source produced no acceptable move"
        );
        Err(TrainerError::random_source(format!(
            "no acceptable move after {} draws",
            MAX_DRAWS_PER_MOVE
        )))
    }
}
