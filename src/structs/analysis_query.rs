use crate::config::constants::MAX_ANALYSIS_LIMIT;
use crate::errors::{QuantiaError, QuantiaResult};

/// A validated request for the external analysis service: a non-empty topic
/// and a result limit in `1..=MAX_ANALYSIS_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisQuery {
    topic: String,
    limit: u32,
}

impl AnalysisQuery {
    pub fn new(topic: &str, limit: u32) -> QuantiaResult<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(QuantiaError::validation_error(
                "topic",
                topic,
                "must not be empty",
                Some("Pass a topic such as 'gold'"),
            ));
        }

        if limit == 0 || limit > MAX_ANALYSIS_LIMIT {
            return Err(QuantiaError::validation_error(
                "limit",
                &limit.to_string(),
                &format!("must be between 1 and {}", MAX_ANALYSIS_LIMIT),
                None,
            ));
        }

        Ok(Self {
            topic: topic.to_string(),
            limit,
        })
    }

    /// Builds a query from raw request parameters, falling back to the
    /// configured defaults for whatever is missing.
    pub fn from_params(topic: Option<&str>, limit: Option<&str>, defaults: &AnalysisQuery) -> QuantiaResult<Self> {
        let topic = topic.unwrap_or(&defaults.topic);
        let limit = match limit {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                QuantiaError::validation_error(
                    "limit",
                    raw,
                    &format!("must be a whole number between 1 and {}", MAX_ANALYSIS_LIMIT),
                    None,
                )
            })?,
            None => defaults.limit,
        };

        Self::new(topic, limit)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Query-string pairs for the `analyze` endpoint.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("topic", self.topic.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn topic_is_trimmed() {
        let query = AnalysisQuery::new("  gold \n", 10).unwrap();

        assert_eq!(query.topic(), "gold");
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn rejects_blank_topic_and_out_of_range_limits() {
        assert!(AnalysisQuery::new("", 10).is_err());
        assert!(AnalysisQuery::new("   ", 10).is_err());
        assert!(AnalysisQuery::new("gold", 0).is_err());
        assert!(AnalysisQuery::new("gold", MAX_ANALYSIS_LIMIT + 1).is_err());
        assert!(AnalysisQuery::new("gold", 1).is_ok());
        assert!(AnalysisQuery::new("gold", MAX_ANALYSIS_LIMIT).is_ok());
    }

    #[test]
    fn params_override_defaults() {
        let defaults = AnalysisQuery::new("gold", 10).unwrap();

        let query = AnalysisQuery::from_params(Some("silver"), Some(" 25 "), &defaults).unwrap();
        assert_eq!(query, AnalysisQuery::new("silver", 25).unwrap());

        let query = AnalysisQuery::from_params(None, None, &defaults).unwrap();
        assert_eq!(query, defaults);
    }

    #[test]
    fn non_numeric_limit_is_a_validation_error() {
        let defaults = AnalysisQuery::new("gold", 10).unwrap();
        let error = AnalysisQuery::from_params(None, Some("ten"), &defaults).unwrap_err();

        assert!(matches!(error, QuantiaError::ValidationError { ref field, .. } if field == "limit"));
    }

    #[test]
    fn query_pairs_format_limit_as_decimal() {
        let query = AnalysisQuery::new("gold & silver", 7).unwrap();

        assert_eq!(
            query.query_pairs(),
            [("topic", "gold & silver".to_string()), ("limit", "7".to_string())]
        );
    }

    proptest! {
        #[test]
        fn any_non_blank_topic_with_limit_in_range_is_accepted(
            topic in "[a-zA-Z0-9 &=?/]{0,20}[a-zA-Z0-9][a-zA-Z0-9 ]{0,5}",
            limit in 1u32..=MAX_ANALYSIS_LIMIT,
        ) {
            let query = AnalysisQuery::new(&topic, limit).unwrap();
            prop_assert_eq!(query.topic(), topic.trim());
            prop_assert_eq!(query.limit(), limit);
        }

        #[test]
        fn limits_above_the_maximum_are_rejected(limit in (MAX_ANALYSIS_LIMIT + 1)..u32::MAX) {
            prop_assert!(AnalysisQuery::new("gold", limit).is_err());
        }
    }
}
