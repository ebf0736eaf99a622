use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One raw answer as submitted by a form, before it is folded into an
/// [`AnswerSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    pub question_id: String,
    pub value: i32,
}

impl AnswerEntry {
    pub fn new(question_id: impl Into<String>, value: i32) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// The complete raw response to one assessment: question id to raw value.
///
/// Keyed by a `BTreeMap` so iteration (and the serialized form) is ordered
/// by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, i32>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an answer, returning the value it replaced, if any.
    pub fn insert(&mut self, question_id: impl Into<String>, value: i32) -> Option<i32> {
        self.0.insert(question_id.into(), value)
    }

    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
