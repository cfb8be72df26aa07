pub mod config;

pub mod notifications;
pub mod ssl;

rust_i18n::i18n!("locales", fallback = "en");
