//! The Strategy trait - the external decision source bound to a player.
//!
//! Every choice an effect asks for goes through the strategy bound to
//! the deciding player. From the engine's point of view the call is
//! synchronous: the effect is suspended at that exact point until the
//! strategy returns. How an implementation produces the answer (table
//! lookup, search, a human at a prompt) is its own concern; the core
//! only requires that it eventually returns a value satisfying the
//! request's constraints. An answer outside the constraints is a fatal
//! programming error, never re-prompted.
//!
//! Default method bodies decline or take the minimum, so a strategy only
//! overrides the decisions it cares about.

use std::collections::VecDeque;

use crate::cards::InstanceId;
use crate::core::PlayerId;
use crate::game::Game;

use super::query::{CardChoice, CardQuery, CardsQuery};

/// Decision source for one player.
///
/// The `candidates` slice passed to card choices is the set of legal
/// answers, pre-computed by the engine from the query; a conforming
/// strategy picks from it (or declines, where allowed).
pub trait Strategy {
    /// Answer a yes/no question. Default: no.
    fn ask(&mut self, _game: &Game, _player: PlayerId, _prompt: &str) -> bool {
        false
    }

    /// Pick one of several labeled options, by index. Default: first.
    fn choose_one(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        _prompt: &str,
        _options: &[&str],
    ) -> usize {
        0
    }

    /// Pick zero or one card. Default: first candidate when the choice
    /// is required, decline otherwise.
    fn choose_card(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        _prompt: &str,
        query: &CardQuery,
        candidates: &[CardChoice],
    ) -> Option<CardChoice> {
        if query.required {
            candidates.first().copied()
        } else {
            None
        }
    }

    /// Pick an ordered set of cards. Default: the first `min` candidates.
    fn choose_cards(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        _prompt: &str,
        query: &CardsQuery,
        candidates: &[InstanceId],
    ) -> Vec<InstanceId> {
        candidates
            .iter()
            .copied()
            .take(query.min.min(candidates.len()))
            .collect()
    }
}

/// Declines everything it can and takes the minimum otherwise.
///
/// Useful as a neutral opponent in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decliner;

impl Strategy for Decliner {}

/// Accepts everything and takes the first legal option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPick;

impl Strategy for FirstPick {
    fn ask(&mut self, _game: &Game, _player: PlayerId, _prompt: &str) -> bool {
        true
    }

    fn choose_card(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        _prompt: &str,
        _query: &CardQuery,
        candidates: &[CardChoice],
    ) -> Option<CardChoice> {
        candidates.first().copied()
    }

    fn choose_cards(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        _prompt: &str,
        query: &CardsQuery,
        candidates: &[InstanceId],
    ) -> Vec<InstanceId> {
        let take = query.max.unwrap_or(candidates.len()).min(candidates.len());
        candidates.iter().copied().take(take).collect()
    }
}

/// A pre-scripted answer for [`Scripted`].
#[derive(Clone, Debug)]
pub enum Answer {
    /// Answer to `ask`.
    Bool(bool),
    /// Answer to `choose_one`, by option index.
    Index(usize),
    /// Answer to `choose_card`.
    Card(Option<CardChoice>),
    /// Answer to `choose_cards`.
    Cards(Vec<InstanceId>),
}

/// Plays back a fixed queue of answers, in order.
///
/// Intended for tests that need exact decision sequences. Panics on an
/// empty queue or an answer of the wrong kind, which in a test points
/// straight at the script/effect mismatch.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<Answer>,
}

impl Scripted {
    /// Create a script from answers in the order they will be consumed.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            queue: answers.into_iter().collect(),
        }
    }

    /// Append an answer to the script.
    pub fn push(&mut self, answer: Answer) {
        self.queue.push_back(answer);
    }

    /// Number of unconsumed answers.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn next(&mut self, wanted: &str) -> Answer {
        self.queue
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted, effect wanted {wanted}"))
    }
}

impl Strategy for Scripted {
    fn ask(&mut self, _game: &Game, _player: PlayerId, prompt: &str) -> bool {
        match self.next("ask") {
            Answer::Bool(b) => b,
            other => panic!("script answer {other:?} does not fit ask({prompt:?})"),
        }
    }

    fn choose_one(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        prompt: &str,
        _options: &[&str],
    ) -> usize {
        match self.next("choose_one") {
            Answer::Index(i) => i,
            other => panic!("script answer {other:?} does not fit choose_one({prompt:?})"),
        }
    }

    fn choose_card(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        prompt: &str,
        _query: &CardQuery,
        _candidates: &[CardChoice],
    ) -> Option<CardChoice> {
        match self.next("choose_card") {
            Answer::Card(c) => c,
            other => panic!("script answer {other:?} does not fit choose_card({prompt:?})"),
        }
    }

    fn choose_cards(
        &mut self,
        _game: &Game,
        _player: PlayerId,
        prompt: &str,
        _query: &CardsQuery,
        _candidates: &[InstanceId],
    ) -> Vec<InstanceId> {
        match self.next("choose_cards") {
            Answer::Cards(c) => c,
            other => panic!("script answer {other:?} does not fit choose_cards({prompt:?})"),
        }
    }
}
