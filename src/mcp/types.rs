//! Tool argument types

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of the page-scraping tools
///
/// `url` is kept raw so a missing or mistyped value reaches the gateway and
/// comes back as a tool error instead of a protocol error. The published
/// schema still declares it as a required string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlArgs {
    #[serde(default)]
    pub url: Option<Value>,
}

impl JsonSchema for UrlArgs {
    fn schema_name() -> Cow<'static, str> {
        "UrlArgs".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Full URL of the component's Storybook docs page, e.g. http://localhost:6006/?path=/docs/button--docs"
                }
            },
            "required": ["url"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_requires_a_string_url() {
        let schema = serde_json::to_value(schemars::schema_for!(UrlArgs)).unwrap();
        assert_eq!(schema["required"], json!(["url"]));
        assert_eq!(schema["properties"]["url"]["type"], json!("string"));
    }

    #[test]
    fn missing_and_mistyped_urls_still_deserialize() {
        let empty: UrlArgs = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.url, None);

        let number: UrlArgs = serde_json::from_value(json!({"url": 7})).unwrap();
        assert_eq!(number.url, Some(json!(7)));
    }
}
