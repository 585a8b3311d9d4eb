use std::collections::BTreeMap;

use super::domain::{LikertQuestion, LikertScale};

/// One agreement level per statement; the last answer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikertAnswerMap {
    answers: BTreeMap<LikertQuestion, LikertScale>,
}

impl LikertAnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rating(&mut self, question: LikertQuestion, value: LikertScale) {
        self.answers.insert(question, value);
    }

    pub fn rating(&self, question: LikertQuestion) -> Option<LikertScale> {
        self.answers.get(&question).copied()
    }

    pub fn is_complete(&self, questions: &[LikertQuestion]) -> bool {
        questions
            .iter()
            .all(|question| self.answers.contains_key(question))
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn as_map(&self) -> &BTreeMap<LikertQuestion, LikertScale> {
        &self.answers
    }
}
