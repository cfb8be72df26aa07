use tracing::{error, info};

/// A transient, user-visible message produced by the form. The text is
/// already localized when the notice is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Seam for surfacing notices to whatever front end hosts the form.
pub trait NoticeSink {
    fn notify(&self, notice: Notice);
}

/// Default sink: notices go to the log.
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(message) => info!(%message, "notice"),
            Notice::Error(message) => error!(%message, "notice"),
        }
    }
}
