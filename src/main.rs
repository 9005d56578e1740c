use clap::Parser;
use gcd_fruits::utils::{logger, validation::Validate};
use gcd_fruits::{CliConfig, Console, DemoConfig, DemoError, DemoPath, LocalStorage, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match DemoConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => DemoConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if config.json_logging() {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        report(&e, "Configuration validation failed");
        std::process::exit(e.exit_code());
    }

    let session = Session::new(LocalStorage::current_dir(), &config);
    let path = cli.demo_path();

    if let Err(e) = run(&session, path).await {
        report(&e, "Demo failed");
        std::process::exit(e.exit_code());
    }
}

async fn run(session: &Session<LocalStorage>, path: DemoPath) -> gcd_fruits::Result<()> {
    tracing::info!("Starting demo path {:?}", path);

    // Load bundled resources before reading any input.
    let fruits = session.prepare(path).await?;
    let runner = session.runner(path, fruits)?;

    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut console = Console::new(&mut stdin, &mut stdout);
    runner.run(&mut console).await
}

fn report(e: &DemoError, context: &str) {
    tracing::error!(
        "{}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
