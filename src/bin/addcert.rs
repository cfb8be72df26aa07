use clap::Parser;
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ssl_monitor::config::MonitorConfig;
use ssl_monitor::notifications::client::HttpChannelProvider;
use ssl_monitor::notifications::notice::TracingNoticeSink;
use ssl_monitor::ssl::client::HttpCertificateClient;
use ssl_monitor::ssl::form::{AddCertificateForm, SubmitError};

/// Create an SSL-certificate monitoring entry on the configured server.
#[derive(Parser, Debug)]
#[command(name = "addcert", version)]
struct Args {
    /// Domain to monitor, e.g. example.com
    #[arg(long)]
    domain: Option<String>,

    /// Days before expiry at which a warning alert fires (1-365)
    #[arg(long, default_value = "30")]
    warning_threshold: String,

    /// Days before expiry at which a critical alert fires (1-30)
    #[arg(long, default_value = "7")]
    expiry_threshold: String,

    /// How often the certificate is re-checked, in days (1-30); empty for
    /// the server default
    #[arg(long, default_value = "1")]
    check_interval: String,

    /// Notification channel id, or "none"
    #[arg(long, default_value = "none")]
    channel: String,

    /// Path to the TOML configuration file
    #[arg(long, default_value = "monitor_config.toml")]
    config: String,

    /// List the selectable notification channels and exit
    #[arg(long)]
    list_channels: bool,
}

fn init_logging() {
    // Log to a file: JSON format, daily rotation
    let file_appender = rolling::daily("logs", "addcert.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    // Log to stdout: human-readable format
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    // Default to `info` level if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging();

    let config = match MonitorConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Critical error loading configuration. Exiting.");
            return Err(e.into());
        }
    };
    rust_i18n::set_locale(&config.locale);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        server = %config.server_address,
        "Starting addcert"
    );

    let mut form = AddCertificateForm::new(
        HttpChannelProvider::new(config.server_address.clone()),
        HttpCertificateClient::new(config.server_address.clone()),
        TracingNoticeSink,
    );

    form.load_channels().await;

    if args.list_channels {
        for (value, label) in form.channel_options() {
            println!("{value:<24} {label}");
        }
        return Ok(());
    }

    let domain = args.domain.unwrap_or_default();
    {
        let values = form.values_mut();
        values.domain = domain.clone();
        values.warning_threshold = args.warning_threshold;
        values.expiry_threshold = args.expiry_threshold;
        values.check_interval = args.check_interval;
        values.notification_channel = args.channel;
    }

    match form.submit().await {
        Ok(()) => {
            info!(domain = %domain, "Certificate monitoring entry created.");
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, error) in errors.iter() {
                eprintln!("{field}: {error}");
            }
            Err(errors.into())
        }
        Err(e) => Err(e.into()),
    }
}
