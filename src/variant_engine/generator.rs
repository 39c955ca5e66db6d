use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value;
use tracing::{info, warn};

use crate::variant_engine::{
    error::GenerationError,
    master_set::parse_master_set,
    models::{GenerationRequest, GenerationResult},
    schema::response_schema,
    shuffler::build_all_variants,
};

/// The external question generator (typically an LLM call).
///
/// Receives the request and the JSON schema the answer must follow, and
/// returns the raw JSON payload. The call is blocking and made once per run.
pub trait QuestionSource {
    fn fetch(&self, request: &GenerationRequest, schema: &Value) -> Result<String, GenerationError>;
}

impl<F> QuestionSource for F
where
    F: Fn(&GenerationRequest, &Value) -> Result<String, GenerationError>,
{
    fn fetch(&self, request: &GenerationRequest, schema: &Value) -> Result<String, GenerationError> {
        self(request, schema)
    }
}

/// Source that always answers with the same payload.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl QuestionSource for StaticSource {
    fn fetch(&self, _request: &GenerationRequest, _schema: &Value) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Run one full generation: validate, fetch, build master set, build variants.
///
/// Any error collapses into [`GenerationResult::Failed`]; nothing from a
/// failed run survives, so the caller can simply call again.
pub fn generate_exam<S>(request: &GenerationRequest, source: &S) -> GenerationResult
where
    S: QuestionSource + ?Sized,
{
    match try_generate(request, source) {
        Ok(result) => result,
        Err(err) => {
            warn!(kind = %err.kind(), error = %err, "generation failed");
            GenerationResult::Failed {
                kind: err.kind(),
                message: err.to_string(),
            }
        }
    }
}

/// Same as [`generate_exam`] but hands the error back to the caller.
pub fn try_generate<S>(request: &GenerationRequest, source: &S) -> Result<GenerationResult, GenerationError>
where
    S: QuestionSource + ?Sized,
{
    request.validate()?;

    let schema = response_schema(request.option_count);
    let payload = source.fetch(request, &schema)?;
    let master_set = parse_master_set(&payload, request.option_count)?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let variants = build_all_variants(&master_set, request.num_variants, &mut rng);

    info!(
        subject = %request.subject,
        questions = master_set.len(),
        variants = variants.len(),
        "exam generated"
    );

    Ok(GenerationResult::Ready {
        metadata: request.metadata(),
        master_set,
        variants,
    })
}
