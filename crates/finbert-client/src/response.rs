use serde_json::Value;

/// One class probability from the hosted model.
#[derive(Debug, Clone)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Tagged decode of the inference endpoint's payload.
///
/// The service answers with one of three shapes: a nested array of
/// label/score pairs, an `{"error": ...}` object while the model is still
/// loading, or something else entirely. The shape is decided here, once, so
/// call sites never probe for keys.
#[derive(Debug)]
pub enum ModelOutput {
    Scores(Vec<LabelScore>),
    Warming(String),
    Malformed(String),
}

pub fn decode_response(value: &Value) -> ModelOutput {
    if let Some(obj) = value.as_object() {
        if let Some(msg) = obj.get("error").and_then(Value::as_str) {
            return ModelOutput::Warming(msg.to_string());
        }
        return ModelOutput::Malformed("unexpected object payload".to_string());
    }

    let Some(outer) = value.as_array() else {
        return ModelOutput::Malformed("payload is neither array nor object".to_string());
    };
    let Some(entries) = outer.first().and_then(Value::as_array) else {
        return ModelOutput::Malformed("missing prediction array".to_string());
    };

    let mut scores = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry.get("label").and_then(Value::as_str);
        let score = entry.get("score").and_then(Value::as_f64);
        match (label, score) {
            (Some(label), Some(score)) => scores.push(LabelScore {
                label: label.to_lowercase(),
                score,
            }),
            _ => {
                return ModelOutput::Malformed(
                    "prediction entry missing label or score".to_string(),
                )
            }
        }
    }

    if scores.is_empty() {
        ModelOutput::Malformed("empty prediction array".to_string())
    } else {
        ModelOutput::Scores(scores)
    }
}
