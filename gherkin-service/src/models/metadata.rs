use serde::Serialize;

/// Static description of the generation model served by this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub model_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub last_updated: &'static str,
}

impl ModelMetadata {
    pub const CURRENT: ModelMetadata = ModelMetadata {
        model_name: "Curiosity Model",
        version: "1.0.0",
        description: "This is the Curiosity Model used for Gherkin code generation.",
        author: "Curiosity",
        last_updated: "2023-07-26T12:34:56Z",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let body = serde_json::to_value(ModelMetadata::CURRENT).unwrap();
        assert_eq!(body["modelName"], "Curiosity Model");
        assert_eq!(body["lastUpdated"], "2023-07-26T12:34:56Z");
        assert_eq!(body.as_object().unwrap().len(), 5);
    }
}
