use std::fmt;
use serde::{Deserialize, Serialize};

use crate::variant_engine::error::{GenerationError, GenerationErrorKind};

// ---------------------------------------------------------------------------
// Master set
// ---------------------------------------------------------------------------

/// One question of the master set, as validated from the generator payload.
///
/// Only the master-set builder constructs these, so `correct_index` always
/// points inside `options`. `index` is the 0-based position in the master set
/// and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterQuestion {
    index: usize,
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl MasterQuestion {
    /// Callers must have checked `correct_index < options.len()`.
    pub(crate) fn new(index: usize, text: String, options: Vec<String>, correct_index: usize) -> Self {
        debug_assert!(correct_index < options.len());
        MasterQuestion { index, text, options, correct_index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based identity used in answer keys.
    pub fn reference(&self) -> usize {
        self.index + 1
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }
}

// ---------------------------------------------------------------------------
// Variant structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub label: char,
    pub text: String,
    pub is_correct: bool,
}

/// A question as it appears in one variant.
///
/// Built only by the shuffler, which guarantees exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantQuestion {
    pub text: String,
    pub options: Vec<VariantOption>,
    /// 1-based number of the originating master question.
    pub master_reference: usize,
    pub correct_label: char,
}

impl VariantQuestion {
    pub fn correct_option(&self) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// Answer-key row for one positional question of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    /// 1-based position in the variant.
    pub number: usize,
    pub master_reference: usize,
    pub correct_label: char,
}

// ---------------------------------------------------------------------------
// Request / metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "EASY"),
            Difficulty::Medium => write!(f, "MEDIUM"),
            Difficulty::Hard   => write!(f, "HARD"),
        }
    }
}

/// Descriptive header data printed on every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamMetadata {
    pub subject: String,
    pub topics: String,
    pub difficulty: Difficulty,
}

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 50;
pub const MIN_OPTIONS: usize = 3;
pub const MAX_OPTIONS: usize = 6;
pub const MIN_VARIANTS: usize = 1;
pub const MAX_VARIANTS: usize = 10;

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub subject: String,
    pub topics: String,
    pub difficulty: Difficulty,
    /// Passed upstream only; the generator's answer is kept as returned.
    pub question_count: usize,
    pub option_count: usize,
    pub num_variants: usize,
    /// `Some` makes every shuffle reproducible.
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Request with the defaults of the exam builder form:
    /// Medium difficulty, 10 questions, 4 options, 3 variants, entropy RNG.
    pub fn new(subject: impl Into<String>) -> Self {
        GenerationRequest {
            subject: subject.into(),
            topics: String::new(),
            difficulty: Difficulty::Medium,
            question_count: 10,
            option_count: 4,
            num_variants: 3,
            rng_seed: None,
        }
    }

    /// Reject parameters outside the ranges the exam builder offers.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let check = |name: &str, value: usize, min: usize, max: usize| {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(GenerationError::InvalidRequest(format!(
                    "{name} {value} outside {min}..={max}"
                )))
            }
        };
        check("question count", self.question_count, MIN_QUESTIONS, MAX_QUESTIONS)?;
        check("option count", self.option_count, MIN_OPTIONS, MAX_OPTIONS)?;
        check("variant count", self.num_variants, MIN_VARIANTS, MAX_VARIANTS)
    }

    pub fn metadata(&self) -> ExamMetadata {
        ExamMetadata {
            subject: self.subject.clone(),
            topics: self.topics.clone(),
            difficulty: self.difficulty,
        }
    }
}

/// Outcome of one generation run. Failure never carries partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GenerationResult {
    Ready {
        metadata: ExamMetadata,
        master_set: Vec<MasterQuestion>,
        variants: Vec<Vec<VariantQuestion>>,
    },
    Failed {
        kind: GenerationErrorKind,
        message: String,
    },
}

impl GenerationResult {
    pub fn is_ready(&self) -> bool {
        matches!(self, GenerationResult::Ready { .. })
    }
}
