use serde::{Deserialize, Serialize};

/// Selector sentinel for "no notification channel".
pub const NO_CHANNEL: &str = "none";

/// Raw values of the add-certificate form. Everything stays text until
/// validation, the native currency of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFormValues {
    pub domain: String,
    pub warning_threshold: String,
    pub expiry_threshold: String,
    pub notification_channel: String,
    /// Empty means "not set"; the backend then applies its own cadence.
    pub check_interval: String,
}

impl Default for CertificateFormValues {
    fn default() -> Self {
        Self {
            domain: String::new(),
            warning_threshold: "30".to_string(),
            expiry_threshold: "7".to_string(),
            notification_channel: NO_CHANNEL.to_string(),
            check_interval: "1".to_string(),
        }
    }
}

/// Payload accepted by the certificate-creation service.
///
/// An empty `notification_channel` requests channel-less monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSslCertificateDto {
    pub domain: String,
    pub warning_threshold: i32,
    pub expiry_threshold: i32,
    pub notification_channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<i32>,
}
