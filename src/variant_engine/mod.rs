//! Core variant engine: master-set validation, shuffling and rendering.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: master/variant questions, request and result structs |
//! | `error`      | `GenerationError` and its copyable kind |
//! | `master_set` | Fail-fast validation of the generator payload |
//! | `shuffle`    | Fisher-Yates shuffle over an injectable RNG |
//! | `shuffler`   | `build_variant` / `build_all_variants` with answer tracking |
//! | `render`     | Markdown and plain-text views of a variant |
//! | `helpers`    | Labels, variant names, export file names, short ids |
//! | `schema`     | JSON schema sent to the question generator |
//! | `generator`  | Single entry point `generate_exam()` |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod master_set;
pub mod models;
pub mod render;
pub mod schema;
pub mod shuffle;
pub mod shuffler;

// Re-export the public API surface so callers can use
// `variant_engine::generate_exam` without reaching into sub-modules.
pub use error::{GenerationError, GenerationErrorKind};
pub use generator::{generate_exam, try_generate, QuestionSource, StaticSource};
pub use helpers::{export_file_name, variant_name};
pub use master_set::{build_master_set, parse_master_set, RawQuestion};
pub use models::{
    AnswerKeyEntry, Difficulty, ExamMetadata, GenerationRequest, GenerationResult,
    MasterQuestion, VariantOption, VariantQuestion,
};
pub use render::{render, render_with_id, RenderContext, RenderedVariant};
pub use schema::response_schema;
pub use shuffler::{answer_key, build_all_variants, build_variant};
