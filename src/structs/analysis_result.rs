use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload returned by the external analysis service.
///
/// The schema belongs to that service and changes without notice, so the
/// payload is kept as a JSON object and read field by field. Anything that
/// is not a JSON object fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    fields: Map<String, Value>,
}

impl AnalysisResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The `topic` field, if present and a string.
    pub fn topic(&self) -> Option<&str> {
        self.fields.get("topic").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_object_is_accepted() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"topic": "gold", "limit": 10, "posts": [{"title": "up"}], "sentiment": {"score": 0.4}}"#,
        )
        .unwrap();

        assert_eq!(result.topic(), Some("gold"));
        assert_eq!(result.get("limit"), Some(&Value::from(10)));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn non_string_topic_is_ignored() {
        let result: AnalysisResult = serde_json::from_str(r#"{"topic": 42}"#).unwrap();

        assert_eq!(result.topic(), None);
        assert!(result.get("topic").is_some());
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(serde_json::from_str::<AnalysisResult>("null").is_err());
        assert!(serde_json::from_str::<AnalysisResult>("[1, 2]").is_err());
        assert!(serde_json::from_str::<AnalysisResult>("\"gold\"").is_err());
    }

    #[test]
    fn serializes_back_to_the_same_object() {
        let raw = r#"{"topic":"gold","limit":10}"#;
        let result: AnalysisResult = serde_json::from_str(raw).unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::from_str::<Value>(raw).unwrap()
        );
    }
}
