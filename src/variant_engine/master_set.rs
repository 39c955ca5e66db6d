//! Master-set builder: turns the generator's JSON payload into validated
//! [`MasterQuestion`]s.
//!
//! Validation is fail-fast. A single bad record (missing field, wrong number
//! of options, empty text, out-of-range correct index) rejects the whole
//! batch with [`GenerationError::MalformedResponse`]; no record is skipped
//! and nothing is truncated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::variant_engine::{
    error::GenerationError,
    models::{MasterQuestion, MAX_OPTIONS, MIN_OPTIONS},
};

/// One question record exactly as the upstream generator emits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer_index: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPayload {
    pub questions: Vec<RawQuestion>,
}

/// Parse a generator payload and build the master set from it.
pub fn parse_master_set(
    payload: &str,
    option_count: usize,
) -> Result<Vec<MasterQuestion>, GenerationError> {
    let raw: RawPayload = serde_json::from_str(payload)?;
    build_master_set(option_count, raw.questions)
}

/// Validate raw records and assign each its master-set index.
pub fn build_master_set(
    option_count: usize,
    records: Vec<RawQuestion>,
) -> Result<Vec<MasterQuestion>, GenerationError> {
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&option_count) {
        return Err(GenerationError::InvalidRequest(format!(
            "option count {option_count} outside {MIN_OPTIONS}..={MAX_OPTIONS}"
        )));
    }
    if records.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "payload contains no questions".to_string(),
        ));
    }

    let master_set = records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| validate_record(index, raw, option_count))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(questions = master_set.len(), option_count, "master set built");
    Ok(master_set)
}

fn validate_record(
    index: usize,
    raw: RawQuestion,
    option_count: usize,
) -> Result<MasterQuestion, GenerationError> {
    let number = index + 1;
    if raw.text.trim().is_empty() {
        return Err(GenerationError::MalformedResponse(format!(
            "question {number} has empty text"
        )));
    }
    if raw.options.len() != option_count {
        return Err(GenerationError::MalformedResponse(format!(
            "question {number} has {} options, expected {option_count}",
            raw.options.len()
        )));
    }
    let correct_index = usize::try_from(raw.correct_answer_index)
        .ok()
        .filter(|&i| i < option_count)
        .ok_or_else(|| {
            GenerationError::MalformedResponse(format!(
                "question {number} has correct_answer_index {} outside 0..{option_count}",
                raw.correct_answer_index
            ))
        })?;

    Ok(MasterQuestion::new(index, raw.text, raw.options, correct_index))
}
