use serde_json::{json, Value};

/// JSON schema the question generator is asked to honour for `option_count`
/// options per question.
pub fn response_schema(option_count: usize) -> Value {
    json!({
        "type": "object",
        "properties": {
            "questions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Question text"
                        },
                        "options": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": format!("{option_count} distinct answer options.")
                        },
                        "correct_answer_index": {
                            "type": "integer",
                            "description": format!(
                                "0-based index of the correct answer among the {option_count} options."
                            )
                        }
                    },
                    "required": ["text", "options", "correct_answer_index"]
                }
            }
        },
        "required": ["questions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_question_field() {
        let schema = response_schema(5);
        let item = &schema["properties"]["questions"]["items"];
        assert_eq!(item["required"], json!(["text", "options", "correct_answer_index"]));
        assert_eq!(schema["required"], json!(["questions"]));
    }

    #[test]
    fn schema_mentions_option_count() {
        let schema = response_schema(6);
        let desc = schema["properties"]["questions"]["items"]["properties"]["options"]["description"]
            .as_str()
            .unwrap();
        assert!(desc.starts_with("6 "));
    }
}
