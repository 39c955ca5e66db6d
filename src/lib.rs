//! # exam_variant_gen
//!
//! Builds printable multiple-choice exam variants from one generated master
//! question set.
//!
//! An external generator (usually an LLM call) produces the master set. This
//! crate validates it, then derives any number of variants in which question
//! order and option order are shuffled independently, while every variant
//! keeps an exact answer key pointing back at the master question.
//!
//! ## How it works
//!
//! 1. Create a [`GenerationRequest`] with subject, topics, difficulty, counts
//!    and an optional RNG seed.
//! 2. Call [`generate_exam`] with a [`QuestionSource`]. The source is called
//!    once, its JSON payload is validated fail-fast into [`MasterQuestion`]s,
//!    and `num_variants` variants are built.
//! 3. Render any variant with [`render`] into a Markdown document and a plain
//!    text copy, both carrying the answer key with master references.
//!
//! ## Key properties
//!
//! - **Reference variant**: variant A keeps master question order; all other
//!   variants shuffle it. Options are shuffled in every variant, A included.
//! - **Traceable keys**: every [`VariantQuestion`] carries `master_reference`
//!   (1-based master number) and its `correct_label`.
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce every shuffle.
//!
//! ## Quick start
//!
//! ```rust
//! use exam_variant_gen::{generate_exam, render, GenerationRequest, GenerationResult, StaticSource};
//!
//! let payload = r#"{"questions":[
//!     {"text":"Capital of France?","options":["Paris","Rome","Oslo"],"correct_answer_index":0}
//! ]}"#;
//! let request = GenerationRequest { option_count: 3, rng_seed: Some(42), ..GenerationRequest::new("Geography") };
//!
//! if let GenerationResult::Ready { metadata, variants, .. } = generate_exam(&request, &StaticSource(payload.into())) {
//!     let doc = render(&variants[0], &metadata, "A");
//!     println!("{}", doc.markdown);
//! }
//! ```

pub mod export;
pub mod variant_engine;

pub use export::to_client_payload;
pub use variant_engine::{
    answer_key, build_all_variants, build_master_set, build_variant, export_file_name,
    generate_exam, parse_master_set, render, render_with_id, response_schema, try_generate,
    variant_name, AnswerKeyEntry, Difficulty, ExamMetadata, GenerationError,
    GenerationErrorKind, GenerationRequest, GenerationResult, MasterQuestion, QuestionSource,
    RawQuestion, RenderContext, RenderedVariant, StaticSource, VariantOption, VariantQuestion,
};
