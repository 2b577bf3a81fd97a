use std::borrow::Cow;
use std::error::Error;
use std::fmt::Display;

/// An error, reported as data.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorInformation {
    /// A machine-readable error type
    pub error: Cow<'static, str>,
    /// A human-readable error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Human-readable error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInformation {
    pub fn new(error: impl Into<Cow<'static, str>>, message: impl Display) -> Self {
        Self {
            error: error.into(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Fill the details with the chain of causes of `err`, if there are any.
    pub fn with_causes(mut self, err: &(dyn Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        if !causes.is_empty() {
            self.details = Some(causes.join(": "));
        }

        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn collects_causes() {
        let err = Outer(Inner);
        let info = ErrorInformation::new("Outer", &err).with_causes(&err);

        assert_eq!(info.message, "outer");
        assert_eq!(info.details.as_deref(), Some("inner"));
        assert_eq!(
            serde_json::to_value(&info).ok(),
            Some(serde_json::json!({"error": "Outer", "message": "outer", "details": "inner"}))
        );
    }
}
