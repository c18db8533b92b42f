// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco tip pools and random selection.

use crate::services::footprint::Level;
use ring::rand::{SecureRandom, SystemRandom};

/// Number of tips returned per assessment.
pub const TIPS_PER_ASSESSMENT: usize = 3;

const LOW_TIPS: [&str; 8] = [
    "🌱 Excellent! Your carbon footprint is low. Keep up the sustainable habits!",
    "💚 Consider sharing your eco-friendly practices with friends and family",
    "🚶 Continue walking and cycling for short distances",
    "♻️ You're doing great! Maybe try composting food waste next",
    "🌞 Share your sustainable lifestyle tips on social media to inspire others",
    "💧 You're conserving well! Consider installing water-saving devices",
    "🚲 Maintain your bike-friendly lifestyle and encourage others",
    "🌳 Think about joining local environmental conservation groups",
];

const MODERATE_TIPS: [&str; 8] = [
    "🚗 Try carpooling or using public transport 2-3 times per week",
    "💡 Switch to LED bulbs and unplug electronics when not in use",
    "🍽️ Reduce meat consumption by having 1-2 vegetarian days per week",
    "🚰 Fix any leaking taps and take shorter showers",
    "🛒 Buy local produce to reduce transportation emissions",
    "🌡️ Set your thermostat 1-2 degrees lower in winter and higher in summer",
    "♻️ Start recycling paper, plastic, and glass consistently",
    "☀️ Use natural light during daytime instead of artificial lighting",
];

const HIGH_TIPS: [&str; 8] = [
    "🚗 URGENT: Consider switching to public transport or electric vehicle",
    "💡 CRITICAL: Audit your home energy usage and reduce unnecessary consumption",
    "🍖 IMPORTANT: Shift to plant-based meals at least 3-4 days per week",
    "✈️ AVOID: Limit air travel and choose video conferences when possible",
    "🏠 ACTION: Improve home insulation and use smart thermostats",
    "🛒 PRIORITY: Reduce shopping for non-essential items significantly",
    "⚡ IMMEDIATE: Switch to renewable energy providers if available",
    "🚿 ESSENTIAL: Limit shower time to 5 minutes and use low-flow showerheads",
];

/// The fixed pool of candidate tips for a level.
pub fn tip_pool(level: Level) -> &'static [&'static str; 8] {
    match level {
        Level::Low => &LOW_TIPS,
        Level::Moderate => &MODERATE_TIPS,
        Level::High => &HIGH_TIPS,
    }
}

/// The system random number generator failed.
#[derive(Debug, thiserror::Error)]
#[error("random source unavailable")]
pub struct RandomError;

/// Source of uniform random indices.
pub trait RandomSource: Send + Sync {
    /// A uniformly distributed value in `0..bound`. `bound` is never 0.
    fn below(&self, bound: usize) -> Result<usize, RandomError>;
}

/// [`RandomSource`] backed by the operating system CSPRNG.
#[derive(Clone)]
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl RandomSource for SystemRandomSource {
    fn below(&self, bound: usize) -> Result<usize, RandomError> {
        let bound = bound as u64;
        // Reject the tail of the u64 range so every residue is equally likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let mut bytes = [0u8; 8];
            self.rng.fill(&mut bytes).map_err(|_| RandomError)?;
            let value = u64::from_le_bytes(bytes);
            if value < zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// Choose three distinct tips for `level`, uniformly at random.
///
/// Runs a partial Fisher-Yates shuffle over the pool indices; the order of
/// the returned tips carries no meaning.
pub fn select_tips<R: RandomSource + ?Sized>(
    level: Level,
    rng: &R,
) -> Result<[&'static str; TIPS_PER_ASSESSMENT], RandomError> {
    let pool = tip_pool(level);
    let mut indices: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

    for i in 0..TIPS_PER_ASSESSMENT {
        let j = i + rng.below(indices.len() - i)?;
        indices.swap(i, j);
    }

    Ok([pool[indices[0]], pool[indices[1]], pool[indices[2]]])
}

/// Deterministic source replaying a fixed script of values (modulo bound).
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    script: Vec<usize>,
    cursor: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            cursor: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn below(&self, bound: usize) -> Result<usize, RandomError> {
        let n = self
            .cursor
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(self.script[n % self.script.len()] % bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FailingRandom;

    impl RandomSource for FailingRandom {
        fn below(&self, _bound: usize) -> Result<usize, RandomError> {
            Err(RandomError)
        }
    }

    #[test]
    fn test_scripted_selection_is_reproducible() {
        // [0..8] swap(0,2) -> [2,1,0,..]; swap(1,1); swap(2,2+5=7) -> [2,1,7,..]
        let rng = ScriptedRandom::new(vec![2, 0, 5]);
        let tips = select_tips(Level::Low, &rng).unwrap();
        assert_eq!(tips, [LOW_TIPS[2], LOW_TIPS[1], LOW_TIPS[7]]);
    }

    #[test]
    fn test_system_selection_properties() {
        let rng = SystemRandomSource::new();
        for level in [Level::Low, Level::Moderate, Level::High] {
            for _ in 0..200 {
                let tips = select_tips(level, &rng).unwrap();
                let unique: HashSet<_> = tips.iter().collect();
                assert_eq!(unique.len(), TIPS_PER_ASSESSMENT);
                assert!(tips.iter().all(|t| tip_pool(level).contains(t)));
            }
        }
    }

    #[test]
    fn test_every_tip_is_reachable() {
        let rng = SystemRandomSource::new();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(select_tips(Level::Moderate, &rng).unwrap());
        }
        assert_eq!(seen.len(), MODERATE_TIPS.len());
    }

    #[test]
    fn test_below_stays_in_range() {
        let rng = SystemRandomSource::new();
        for bound in 1..10 {
            for _ in 0..50 {
                assert!(rng.below(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn test_random_failure_propagates() {
        assert!(select_tips(Level::High, &FailingRandom).is_err());
    }
}
