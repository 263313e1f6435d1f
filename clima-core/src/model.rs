use serde::Serialize;
use serde_json::Value;

/// Reshaped current-conditions payload.
///
/// Field values are carried verbatim from the source JSON: no numeric or
/// string type is enforced, and the serialized form keeps the historical
/// capitalized key names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    #[serde(rename = "Temperature")]
    pub temperature: Value,

    #[serde(rename = "Description")]
    pub description: Value,

    #[serde(rename = "Humidity")]
    pub humidity: Value,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_capitalized_keys() {
        let report = WeatherReport {
            temperature: json!(80),
            description: json!("céu limpo"),
            humidity: json!(80),
        };

        let value = serde_json::to_value(&report).expect("report should serialize");

        assert_eq!(
            value,
            json!({"Temperature": 80, "Description": "céu limpo", "Humidity": 80})
        );
    }

    #[test]
    fn carries_non_string_values_untouched() {
        let report = WeatherReport {
            temperature: json!("cinquenta"),
            description: json!(123),
            humidity: json!(null),
        };

        let value = serde_json::to_value(&report).expect("report should serialize");

        assert_eq!(
            value,
            json!({"Temperature": "cinquenta", "Description": 123, "Humidity": null})
        );
    }
}
