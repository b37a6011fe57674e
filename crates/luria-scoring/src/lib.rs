//! luria-scoring
//!
//! Raw score calculation: turns an answer set plus a test template's
//! scoring rule into an unnormalized score. Pure — no persistence and no
//! normative data; normalization happens in luria-norms.

pub mod error;
pub mod expr;

use std::collections::BTreeMap;

use tracing::warn;

use luria_core::config::ScoringConfig;
use luria_core::models::answers::AnswerSet;
use luria_core::models::rule::ScoringRule;
use luria_core::models::score::RawScore;

use crate::error::ScoringError;

/// Compute a raw score with the default engine configuration.
pub fn compute_raw_score(
    answers: &AnswerSet,
    rule: &ScoringRule,
) -> Result<RawScore, ScoringError> {
    compute_raw_score_with(answers, rule, &ScoringConfig::default())
}

/// Compute a raw score.
///
/// Every strategy either produces a complete `RawScore` or fails on the
/// first problem it finds; a partially summed score is never returned.
pub fn compute_raw_score_with(
    answers: &AnswerSet,
    rule: &ScoringRule,
    config: &ScoringConfig,
) -> Result<RawScore, ScoringError> {
    match rule {
        ScoringRule::SimpleSum {
            included,
            inverted,
            max_scale_value,
        } => {
            if included.is_empty() {
                return Err(ScoringError::InvalidRule(
                    "simple_sum includes no questions".into(),
                ));
            }
            let mut total = 0;
            for &question in included {
                let value = integer_answer(answers, question)?;
                total += if inverted.contains(&question) {
                    *max_scale_value - value
                } else {
                    value
                };
            }
            Ok(RawScore {
                total: total as f64,
                sections: None,
            })
        }
        ScoringRule::WeightedSum { weights } => {
            if weights.is_empty() {
                return Err(ScoringError::InvalidRule(
                    "weighted_sum has no weights".into(),
                ));
            }
            let mut total = 0.0;
            for entry in weights {
                let value = integer_answer(answers, entry.question)?;
                total += value as f64 * entry.weight;
            }
            Ok(RawScore {
                total,
                sections: None,
            })
        }
        ScoringRule::Sectioned { sections } => {
            if sections.is_empty() {
                return Err(ScoringError::InvalidRule(
                    "sectioned rule has no sections".into(),
                ));
            }
            let mut subtotals = BTreeMap::new();
            let mut total = 0.0;
            for section in sections {
                let max = section
                    .max_scale_value
                    .unwrap_or(config.sectioned_inversion_max);
                let mut sum = 0;
                for &question in &section.questions {
                    let value = integer_answer(answers, question)?;
                    sum += if section.inverted.contains(&question) {
                        max - value
                    } else {
                        value
                    };
                }
                let weighted = sum as f64 * section.weight;
                subtotals.insert(section.name.clone(), weighted);
                total += weighted;
            }
            Ok(RawScore {
                total,
                sections: Some(subtotals),
            })
        }
        ScoringRule::Custom { expression } => {
            let formula = expr::parse(expression).map_err(|e| custom_failed(expression, e))?;
            let total = formula
                .evaluate(answers)
                .map_err(|e| custom_failed(expression, e))?;
            Ok(RawScore {
                total,
                sections: None,
            })
        }
    }
}

fn integer_answer(answers: &AnswerSet, question: u32) -> Result<i64, ScoringError> {
    let value = answers
        .get(question)
        .ok_or(ScoringError::Unanswered(question))?;
    value
        .as_integer()
        .ok_or(ScoringError::NotANumber(question))
}

/// The structured cause goes to the log; the error the caller displays
/// stays generic.
fn custom_failed(expression: &str, cause: expr::ExprError) -> ScoringError {
    warn!(expression, cause = %cause, "custom score expression failed");
    ScoringError::CustomFailed {
        detail: cause.to_string(),
    }
}
