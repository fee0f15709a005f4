use anyhow::Context;
use bookshelf_app::Service;
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand, ValueEnum};

/// Run and inspect bookshelf services.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve one of the HTTP services until interrupted
    Serve {
        /// Which service to run
        #[arg(value_enum, default_value_t = ServiceArg::Books)]
        service: ServiceArg,
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long, short)]
        port: Option<u16>,
    },
    /// Print the effective settings as JSON
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ServiceArg {
    Books,
    Version,
}

impl From<ServiceArg> for Service {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Books => Service::Books,
            ServiceArg::Version => Service::Version,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings =
        Settings::load().with_context(|| "failed to load bookshelf settings")?;

    match cli.command {
        Command::Serve {
            service,
            host,
            port,
        } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            bookshelf_telemetry::init(&settings.telemetry)?;

            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(bookshelf_app::run(service.into(), settings))
        }
        Command::Config => {
            settings.database.url = settings.database.redacted_url();
            let rendered = serde_json::to_string_pretty(&settings)
                .context("failed to render settings")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
