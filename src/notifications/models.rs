use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A notification channel as returned by the alert-config service.
///
/// The legacy service encodes `enabled` either as a JSON boolean or as the
/// strings "true"/"false". Normalization to a strict boolean happens here,
/// once, so the rest of the crate only ever sees `bool`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
    #[serde(rename = "notify_name")]
    pub name: String,
    #[serde(rename = "notification_type")]
    pub channel_type: String, // e.g., "telegram", "webhook"
    #[serde(deserialize_with = "bool_or_legacy_string")]
    pub enabled: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

impl NotificationChannel {
    /// Display label used by the channel selector.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.channel_type)
    }
}

fn bool_or_legacy_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolOrString;

    impl serde::de::Visitor<'_> for BoolOrString {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or the strings \"true\"/\"false\"")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E> {
            Ok(value == "true")
        }
    }

    deserializer.deserialize_any(BoolOrString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn channel_from(enabled: serde_json::Value) -> serde_json::Result<NotificationChannel> {
        serde_json::from_value(json!({
            "id": "ch_1",
            "notify_name": "Ops Webhook",
            "notification_type": "webhook",
            "enabled": enabled,
        }))
    }

    #[test]
    fn enabled_accepts_json_booleans() {
        assert!(channel_from(json!(true)).unwrap().enabled);
        assert!(!channel_from(json!(false)).unwrap().enabled);
    }

    #[test]
    fn enabled_accepts_legacy_string_encoding() {
        assert!(channel_from(json!("true")).unwrap().enabled);
        assert!(!channel_from(json!("false")).unwrap().enabled);
        // Anything but the literal "true" counts as disabled.
        assert!(!channel_from(json!("yes")).unwrap().enabled);
    }

    #[test]
    fn enabled_rejects_other_json_types() {
        assert!(channel_from(json!(1)).is_err());
        assert!(channel_from(json!(null)).is_err());
    }

    #[test]
    fn serialized_form_uses_the_wire_field_names() {
        let channel = channel_from(json!("true")).unwrap();
        let value = serde_json::to_value(&channel).unwrap();

        assert_eq!(value["notify_name"], "Ops Webhook");
        assert_eq!(value["notification_type"], "webhook");
        // Once ingested, `enabled` is a strict boolean.
        assert_eq!(value["enabled"], json!(true));
    }

    #[test]
    fn option_label_combines_name_and_type() {
        let channel = channel_from(json!(true)).unwrap();
        assert_eq!(channel.option_label(), "Ops Webhook (webhook)");
    }
}
