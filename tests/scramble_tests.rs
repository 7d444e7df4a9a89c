//! Tests for scramble generation and explanations
//!
//! These tests verify:
//! - Default length and the empty-scramble policy
//! - Seeded reproducibility
//! - Independence of fresh and reused engines, including across threads

use cubetrainer::{
    explain_move, Face, Modifier, Move, Scramble, ScrambleEngine, DEFAULT_SCRAMBLE_LENGTH,
};
use std::collections::HashSet;
use std::thread;

// =============================================================================
// Length Policy
// =============================================================================

#[test]
fn test_default_length_is_twenty() {
    assert_eq!(DEFAULT_SCRAMBLE_LENGTH, 20);
    let scramble = ScrambleEngine::new().generate(DEFAULT_SCRAMBLE_LENGTH).unwrap();
    assert_eq!(scramble.len(), 20);
    assert!(scramble.is_valid());
}

#[test]
fn test_zero_length_gives_empty_results() {
    let (scramble, explanations) = ScrambleEngine::new().generate_with_explanation(0).unwrap();
    assert!(scramble.is_empty());
    assert!(explanations.is_empty());
}

#[test]
fn test_single_move_is_any_valid_token() {
    let (scramble, explanations) = ScrambleEngine::seeded(5).generate_with_explanation(1).unwrap();
    let token = scramble.to_string();
    assert!(token.parse::<Move>().is_ok());
    assert_eq!(explanations, vec![explain_move(&scramble.moves()[0])]);
}

#[test]
fn test_r2_explanation() {
    let mv: Move = "R2".parse().unwrap();
    assert_eq!(mv, Move::new(Face::Right, Modifier::Double));
    assert_eq!(explain_move(&mv), "Right face 180 degrees");
}

// =============================================================================
// Reproducibility & Independence
// =============================================================================

#[test]
fn test_seeded_twenty_moves_are_reproducible() {
    let first = ScrambleEngine::seeded(31337).generate(20).unwrap();
    let second = ScrambleEngine::seeded(31337).generate(20).unwrap();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_string().split(' ').count(), 20);
}

#[test]
fn test_different_seeds_differ() {
    let a = ScrambleEngine::seeded(1).generate(20).unwrap();
    let b = ScrambleEngine::seeded(2).generate(20).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_reused_engine_produces_fresh_sequences() {
    let mut engine = ScrambleEngine::seeded(11);
    let first = engine.generate(20).unwrap();
    let second = engine.generate(20).unwrap();
    assert!(first.is_valid());
    assert!(second.is_valid());
    assert_ne!(first, second);
}

#[test]
fn test_reused_engine_first_move_is_unconstrained() {
    // The previous call's last face must not restrict the next call's first move.
    let mut engine = ScrambleEngine::seeded(3);
    let mut first_faces = HashSet::new();
    for _ in 0..300 {
        let scramble = engine.generate(3).unwrap();
        first_faces.insert(scramble.moves()[0].face);
    }
    assert_eq!(first_faces.len(), 6);
}

#[test]
fn test_all_eighteen_moves_appear() {
    let scramble = ScrambleEngine::seeded(8).generate(2_000).unwrap();
    let distinct: HashSet<_> = scramble.iter().copied().collect();
    assert_eq!(distinct.len(), 18);
}

#[test]
fn test_concurrent_engines() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            thread::spawn(move || {
                let mut engine = ScrambleEngine::seeded(seed);
                (0..50)
                    .map(|_| engine.generate(25).unwrap())
                    .collect::<Vec<Scramble>>()
            })
        })
        .collect();

    for handle in handles {
        for scramble in handle.join().unwrap() {
            assert_eq!(scramble.len(), 25);
            assert!(scramble.is_valid());
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_rejects_unknown_tokens() {
    assert!("R U X".parse::<Scramble>().is_err());
    assert!("R U'2".parse::<Scramble>().is_err());
    assert!("".parse::<Scramble>().unwrap().is_empty());
}
