//! Add-certificate form workflow: channel loading, validation, submission.

use rust_i18n::t;
use thiserror::Error;
use tracing::{debug, warn};

use super::client::{CertificateCreator, SubmissionError};
use super::models::{CertificateFormValues, NO_CHANNEL};
use super::validator::ValidationErrors;
use crate::notifications::client::ChannelProvider;
use crate::notifications::models::NotificationChannel;
use crate::notifications::notice::{Notice, NoticeSink};

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    ChannelsLoading,
    ChannelsReady,
    ChannelsLoadFailed,
    Validating,
    Submitting,
}

/// Why a submit attempt did not create a monitoring entry.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// A channel fetch or another submission is still in flight. The call
    /// is rejected, not queued.
    #[error("A request is already in flight")]
    Busy,
    /// One or more fields failed validation; nothing was sent.
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),
    /// The creation service turned the payload down.
    #[error(transparent)]
    Rejected(#[from] SubmissionError),
}

/// Drives one "add SSL certificate" session: loads the selectable channels,
/// validates the entered values and hands the normalized payload to the
/// creation service.
pub struct AddCertificateForm<P, C, N> {
    channel_provider: P,
    certificate_creator: C,
    notices: N,
    values: CertificateFormValues,
    channels: Vec<NotificationChannel>,
    channels_loaded: bool,
    load_failed: bool,
    state: FormState,
    is_loading: bool,
    is_pending: bool,
}

impl<P, C, N> AddCertificateForm<P, C, N>
where
    P: ChannelProvider,
    C: CertificateCreator,
    N: NoticeSink,
{
    pub fn new(channel_provider: P, certificate_creator: C, notices: N) -> Self {
        Self {
            channel_provider,
            certificate_creator,
            notices,
            values: CertificateFormValues::default(),
            channels: Vec::new(),
            channels_loaded: false,
            load_failed: false,
            state: FormState::Idle,
            is_loading: false,
            is_pending: false,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &CertificateFormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut CertificateFormValues {
        &mut self.values
    }

    /// Enabled channels offered by the selector.
    pub fn channels(&self) -> &[NotificationChannel] {
        &self.channels
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_pending(&self) -> bool {
        self.is_pending
    }

    /// `(value, label)` entries for the channel selector: the no-channel
    /// sentinel first, then one entry per enabled channel. With nothing to
    /// offer, a single placeholder entry describes why.
    pub fn channel_options(&self) -> Vec<(String, String)> {
        let mut options = vec![(NO_CHANNEL.to_string(), t!("none").into_owned())];

        if self.channels.is_empty() {
            let placeholder = if self.is_loading {
                t!("loadingChannels")
            } else {
                t!("noChannelsFound")
            };
            options.push((String::new(), placeholder.into_owned()));
        } else {
            options.extend(
                self.channels
                    .iter()
                    .map(|channel| (channel.id.clone(), channel.option_label())),
            );
        }

        options
    }

    /// Fetches the channel list and keeps only enabled channels as
    /// selectable options. A failed fetch surfaces one notice and leaves
    /// the form usable with an empty list.
    pub async fn load_channels(&mut self) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.state = FormState::ChannelsLoading;

        match self.channel_provider.get_channels().await {
            Ok(channels) => {
                self.channels = channels.into_iter().filter(|c| c.enabled).collect();
                self.channels_loaded = true;
                self.load_failed = false;
                self.state = FormState::ChannelsReady;
                debug!(count = self.channels.len(), "Loaded notification channels");
            }
            Err(error) => {
                warn!(error = %error, "Failed to load notification channels");
                self.notices
                    .notify(Notice::Error(t!("failedToLoadCertificates").into_owned()));
                self.channels.clear();
                self.load_failed = true;
                self.state = FormState::ChannelsLoadFailed;
            }
        }

        self.is_loading = false;
    }

    /// Validates the current values and hands the normalized payload to the
    /// creation service. Field errors block the call entirely; a service
    /// rejection surfaces one notice and keeps the entered values for a
    /// retry. Success resets the form to its defaults.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.is_loading || self.is_pending {
            return Err(SubmitError::Busy);
        }

        self.state = FormState::Validating;
        let certificate = match self.values.validate() {
            Ok(certificate) => certificate,
            Err(errors) => {
                self.state = self.settled_state();
                return Err(SubmitError::Invalid(errors));
            }
        };

        self.is_pending = true;
        self.state = FormState::Submitting;
        let result = self.certificate_creator.create(&certificate).await;
        self.is_pending = false;

        match result {
            Ok(()) => {
                self.notices
                    .notify(Notice::Success(t!("sslCertificateAdded").into_owned()));
                self.values = CertificateFormValues::default();
                self.state = self.settled_state();
                Ok(())
            }
            Err(error) => {
                warn!(domain = %certificate.domain, error = %error, "Certificate creation failed");
                self.notices
                    .notify(Notice::Error(t!("failedToAddCertificate").into_owned()));
                self.state = self.settled_state();
                Err(SubmitError::Rejected(error))
            }
        }
    }

    // Where the form settles when nothing is in flight.
    fn settled_state(&self) -> FormState {
        if self.channels_loaded {
            FormState::ChannelsReady
        } else if self.load_failed {
            FormState::ChannelsLoadFailed
        } else {
            FormState::Idle
        }
    }
}
