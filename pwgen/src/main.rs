use std::io;

use pwgen::{Args, Error, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pwgen=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let args = Args::parse_normalized(std::env::args_os());

    // Configuration problems get a message and a clean exit, before anything
    // is generated. Entropy and I/O failures propagate.
    let result = args.into_config().and_then(|config| {
        tracing::debug!(?config, "starting generation");
        let mut stdout = io::stdout().lock();
        run(&config, &mut stdout)
    });

    match result {
        Err(e) if e.is_configuration() => {
            println!("{}", e);
            Ok(())
        }
        other => other,
    }
}
