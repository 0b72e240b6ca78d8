//! Player decisions.
//!
//! The engine never reads a terminal or a socket itself. Whenever a rule
//! needs a human decision (which target, which card to discard, whether to
//! respond) it asks a [`ChoiceProvider`] for an integer in a closed range and
//! blocks until it gets one. Providers must always answer within range.
//!
//! Two providers ship with the crate:
//!
//! - [`ScriptedChoices`]: replays a fixed list of answers, for tests.
//! - [`RandomChoices`]: answers uniformly at random from a seeded stream,
//!   for simulations.

use std::collections::VecDeque;

use super::{GameRng, PlayerId};

/// Source of player decisions.
pub trait ChoiceProvider {
    /// Pick a value in `min..=max` on behalf of `player`.
    ///
    /// `prompt` describes the decision for display purposes.
    fn choose(&mut self, player: PlayerId, prompt: &str, min: usize, max: usize) -> usize;
}

/// Ask `input` to pick one of `len` options and clamp the answer.
///
/// Returns `None` when there is nothing to pick from.
pub fn pick_index(
    input: &mut dyn ChoiceProvider,
    player: PlayerId,
    prompt: &str,
    len: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let answer = input.choose(player, prompt, 0, len - 1);
    Some(answer.min(len - 1))
}

/// Replays a fixed sequence of answers.
///
/// Answers outside the requested range are skipped, the way a console
/// provider re-prompts on bad input. Once the script runs out every question
/// is answered with its minimum.
///
/// ```
/// use four_souls::core::{ChoiceProvider, PlayerId, ScriptedChoices};
///
/// let mut input = ScriptedChoices::new([9, 2]);
/// assert_eq!(input.choose(PlayerId(0), "pick", 0, 3), 2);
/// assert_eq!(input.choose(PlayerId(0), "pick", 1, 6), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<usize>,
    prompts: Vec<String>,
}

impl ScriptedChoices {
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue more answers after the current script.
    pub fn push(&mut self, answer: usize) {
        self.answers.push_back(answer);
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Every prompt asked so far, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, _player: PlayerId, prompt: &str, min: usize, max: usize) -> usize {
        self.prompts.push(prompt.to_string());
        while let Some(answer) = self.answers.pop_front() {
            if (min..=max).contains(&answer) {
                return answer;
            }
        }
        min
    }
}

/// Answers every question uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomChoices {
    rng: GameRng,
}

impl RandomChoices {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("choices"),
        }
    }
}

impl ChoiceProvider for RandomChoices {
    fn choose(&mut self, _player: PlayerId, _prompt: &str, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range_usize(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_skips_out_of_range() {
        let mut input = ScriptedChoices::new([7, 8, 1]);
        assert_eq!(input.choose(PlayerId(0), "target", 0, 2), 1);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.prompts(), ["target".to_string()]);
    }

    #[test]
    fn test_scripted_falls_back_to_min() {
        let mut input = ScriptedChoices::default();
        assert_eq!(input.choose(PlayerId(1), "roll", 1, 6), 1);
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut input = RandomChoices::new(3);
        for _ in 0..200 {
            let v = input.choose(PlayerId(0), "x", 2, 5);
            assert!((2..=5).contains(&v));
        }
        assert_eq!(input.choose(PlayerId(0), "x", 4, 4), 4);
    }

    #[test]
    fn test_pick_index() {
        let mut input = ScriptedChoices::new([1]);
        assert_eq!(pick_index(&mut input, PlayerId(0), "card", 3), Some(1));
        assert_eq!(pick_index(&mut input, PlayerId(0), "card", 0), None);
    }
}
