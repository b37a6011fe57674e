use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer as delivered by the test front end.
///
/// The delivery layer stores whatever the form produced: Likert values
/// arrive as numbers or numeric strings, free-text answers as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Coerce to an integer score value.
    ///
    /// Numeric strings are trimmed and parsed; numbers must be integral.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            AnswerValue::Number(_) => None,
            AnswerValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A patient's answers, keyed by question number rendered as a string
/// (the wire shape of the delivery layer's JSON). Read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(pub HashMap<String, AnswerValue>);

impl AnswerSet {
    pub fn get(&self, question: u32) -> Option<&AnswerValue> {
        self.0.get(&question.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, AnswerValue)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, value)| (question.to_string(), value))
                .collect(),
        )
    }
}
