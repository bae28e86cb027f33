use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber for the CLI.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set up the global logger");
}
