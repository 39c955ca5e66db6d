//! End-to-end demo: generate a seeded exam and print every variant.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! The question source here is a closure returning a canned payload; a real
//! host would call its LLM client inside the closure and map API errors with
//! `GenerationError::from_api_message`.
//!
//! ## Key concepts demonstrated
//!
//! - `GenerationRequest::new(subject)` gives the usual defaults; override any
//!   field with struct update syntax.
//! - `rng_seed: Some(u64)` makes every shuffle reproducible.
//! - Variant A keeps master question order; B and C shuffle it.
//! - The answer key lists each question's master reference next to its label.

use exam_variant_gen::{
    generate_exam, render, variant_name, Difficulty, GenerationError, GenerationRequest,
    GenerationResult,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const PAYLOAD: &str = r#"{"questions":[
    {"text":"What is the capital of France?","options":["Paris","London","Berlin","Madrid"],"correct_answer_index":0},
    {"text":"Which planet is known as the Red Planet?","options":["Venus","Jupiter","Mars","Saturn"],"correct_answer_index":2},
    {"text":"What is 6 x 7?","options":["36","42","48","56"],"correct_answer_index":1},
    {"text":"Which gas do plants absorb?","options":["Oxygen","Nitrogen","Helium","Carbon dioxide"],"correct_answer_index":3}
]}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request = GenerationRequest {
        topics: "Geography, Astronomy, Arithmetic, Biology".to_string(),
        difficulty: Difficulty::Easy,
        question_count: 4,
        rng_seed: Some(42),
        ..GenerationRequest::new("General Knowledge")
    };

    let source = |req: &GenerationRequest, _schema: &Value| -> Result<String, GenerationError> {
        tracing::info!(subject = %req.subject, "fetching questions");
        Ok(PAYLOAD.to_string())
    };

    match generate_exam(&request, &source) {
        GenerationResult::Ready { metadata, variants, .. } => {
            for (i, variant) in variants.iter().enumerate() {
                let name = variant_name(i);
                let doc = render(variant, &metadata, &name);
                println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
                println!("  {}", doc.file_name);
                println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
                println!("{}", doc.markdown);
            }
        }
        GenerationResult::Failed { kind, message } => {
            eprintln!("generation failed ({kind}): {message}");
        }
    }
}
