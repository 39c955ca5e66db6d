use serde_json::{json, Value};
use crate::variant_engine::{
    helpers::export_file_name,
    models::{ExamMetadata, VariantQuestion},
    render::RenderedVariant,
    shuffler::answer_key,
};

/// Questions as shown to a student: number, text and labelled options only.
fn public_questions(variant: &[VariantQuestion]) -> Value {
    let questions: Vec<Value> = variant
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let options: Vec<Value> = q
                .options
                .iter()
                .map(|o| json!({ "label": o.label.to_string(), "text": o.text }))
                .collect();
            json!({ "number": i + 1, "text": q.text, "options": options })
        })
        .collect();
    Value::Array(questions)
}

/// Grader view: positional number, master reference, correct label.
fn key_entries(variant: &[VariantQuestion]) -> Value {
    let entries: Vec<Value> = answer_key(variant)
        .into_iter()
        .map(|e| {
            json!({
                "number": e.number,
                "master_reference": e.master_reference,
                "correct_label": e.correct_label.to_string(),
            })
        })
        .collect();
    Value::Array(entries)
}

/// Map one built variant to the JSON object a host UI displays.
///
/// `rendered` carries the two text documents offered for download and
/// clipboard; they were rendered from the same `variant`.
pub fn to_client_payload(
    variant: &[VariantQuestion],
    metadata: &ExamMetadata,
    variant_name: &str,
    rendered: &RenderedVariant,
) -> Value {
    json!({
        "variant": variant_name,
        "test_id": rendered.test_id,
        "subject": metadata.subject,
        "topics": metadata.topics,
        "difficulty": metadata.difficulty.to_string(),
        "questions": public_questions(variant),
        "answer_key": key_entries(variant),
        "download": {
            "file_name": export_file_name(&metadata.subject, variant_name, "md"),
            "mime": "text/markdown",
            "content": rendered.markdown,
        },
        "clipboard": rendered.plain_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant_engine::{
        models::{Difficulty, VariantOption},
        render::render_with_id,
    };

    fn variant() -> Vec<VariantQuestion> {
        vec![VariantQuestion {
            text: "6 x 7?".to_string(),
            options: vec![
                VariantOption { label: 'A', text: "42".to_string(), is_correct: true },
                VariantOption { label: 'B', text: "41".to_string(), is_correct: false },
                VariantOption { label: 'C', text: "43".to_string(), is_correct: false },
            ],
            master_reference: 3,
            correct_label: 'A',
        }]
    }

    #[test]
    fn payload_separates_questions_from_key() {
        let meta = ExamMetadata {
            subject: "Math Basics".to_string(),
            topics: "Multiplication".to_string(),
            difficulty: Difficulty::Hard,
        };
        let v = variant();
        let rendered = render_with_id(&v, &meta, "B", "abcd1234");
        let payload = to_client_payload(&v, &meta, "B", &rendered);

        assert_eq!(payload["questions"][0]["number"], 1);
        assert_eq!(payload["questions"][0]["options"][0]["label"], "A");
        assert!(payload["questions"][0]["options"][0].get("is_correct").is_none());
        assert_eq!(payload["answer_key"][0]["master_reference"], 3);
        assert_eq!(payload["answer_key"][0]["correct_label"], "A");
        assert_eq!(payload["difficulty"], "HARD");
        assert_eq!(payload["download"]["file_name"], "test_Math_Basics_Variant_B.md");
        assert_eq!(payload["test_id"], "abcd1234");
        assert_eq!(payload["clipboard"], rendered.plain_text.as_str());
    }
}
