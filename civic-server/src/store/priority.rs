//! Mock priority scoring
//!
//! Priority is a stand-in for a real classifier: a uniform draw in
//! `[MIN_PRIORITY, MAX_PRIORITY)`. The scorer is a trait so tests can pin it.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// Lowest score handed out (inclusive)
pub const MIN_PRIORITY: u32 = 40;
/// Upper bound (exclusive)
pub const MAX_PRIORITY: u32 = 90;

/// Strategy producing a priority score for a new complaint
pub trait PriorityScorer: Send + Sync {
    fn score(&self) -> u32;
}

/// Uniform pseudo-random score in `[40, 90)`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPriority;

impl PriorityScorer for RandomPriority {
    fn score(&self) -> u32 {
        rand::thread_rng().gen_range(MIN_PRIORITY..MAX_PRIORITY)
    }
}

/// Always returns the same score
#[derive(Debug, Clone, Copy)]
pub struct FixedPriority(pub u32);

impl PriorityScorer for FixedPriority {
    fn score(&self) -> u32 {
        self.0
    }
}

/// Cycles through a fixed list of scores
#[derive(Debug)]
pub struct SequencePriority {
    scores: Vec<u32>,
    next: AtomicUsize,
}

impl SequencePriority {
    /// # Panics
    /// If `scores` is empty.
    pub fn new(scores: Vec<u32>) -> Self {
        assert!(!scores.is_empty(), "SequencePriority needs at least one score");
        Self {
            scores,
            next: AtomicUsize::new(0),
        }
    }
}

impl PriorityScorer for SequencePriority {
    fn score(&self) -> u32 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.scores[i % self.scores.len()]
    }
}
