use thiserror::Error;

/// Failure of a geocoding or current-weather lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The geocoder answered, but had no match for the query.
    #[error("no location found for '{query}'")]
    NotFound { query: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Malformed JSON, or a required field is missing.
    #[error("could not parse service response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LookupError {
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished_from_other_failures() {
        assert!(LookupError::not_found("Nowhere").is_not_found());

        let status = LookupError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(!status.is_not_found());

        let parse: LookupError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!parse.is_not_found());
    }

    #[test]
    fn messages_carry_context() {
        let err = LookupError::not_found("Nonexistentville");
        assert_eq!(err.to_string(), "no location found for 'Nonexistentville'");

        let err = LookupError::Status {
            status: 400,
            body: "{\"error\":true}".into(),
        };
        assert!(err.to_string().contains("status 400"));
    }
}
