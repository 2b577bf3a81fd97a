use serde::{Deserialize, Serialize};

/// The outcome of importing one dictionary document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResult {
    /// The id of the created CPE list
    pub id: i32,
    /// The name of the created CPE list
    pub name: String,
    /// The number of imported items
    pub items: usize,
    /// Elements which got skipped while importing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn warnings_are_omitted_when_empty() -> Result<(), serde_json::Error> {
        let result = IngestResult {
            id: 1,
            name: "2024-01-01T00:00:00Z".into(),
            items: 2,
            warnings: vec![],
        };

        assert_eq!(
            serde_json::to_value(&result)?,
            json!({"id": 1, "name": "2024-01-01T00:00:00Z", "items": 2})
        );

        let result: IngestResult =
            serde_json::from_value(json!({"id": 1, "name": "list", "items": 0}))?;
        assert!(result.warnings.is_empty());

        Ok(())
    }
}
