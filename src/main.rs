use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use funnelview::api::{load_sections, try_load_sections};
use funnelview::config::Config;
use funnelview::provider::CsvRowProvider;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Marketing funnel viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// CSV of funnel counters; the last row is used
    #[arg(global = true, short, long, default_value = "date.csv")]
    data: PathBuf,

    /// JSON config file; explicit CLI flags win over it
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    /// Exit with an error when the data file cannot be read
    #[arg(global = true, long, default_value_t = false)]
    strict: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the funnels as terminal tables
    Show(cmd::show::ShowArgs),
    /// Write the funnels as JSON
    Export(cmd::export::ExportArgs),
}

fn init_logging(debug: bool) {
    let mut filter = EnvFilter::from_default_env();

    if std::env::var("RUST_LOG").is_err() {
        let level = if debug { "debug" } else { "info" };
        if let Ok(directive) = format!("funnelview={}", level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    let cli_config = match &cli.command {
        Commands::Show(args) => &args.config,
        Commands::Export(args) => &args.config,
    };

    // Subcommand args live in the subcommand's matches, not the root.
    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some((_, sub_matches)) = matches.subcommand() {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let provider = CsvRowProvider::new(&cli.data, config.source.clone());

    let sections = if cli.strict {
        try_load_sections(&provider).unwrap_or_else(|e| {
            error!("Cannot read '{}': {}", cli.data.display(), e);
            process::exit(1);
        })
    } else {
        load_sections(&provider)
    };

    if sections.is_empty() {
        warn!("No funnel data in '{}'", cli.data.display());
    }

    let result = match cli.command {
        Commands::Show(args) => cmd::show::run(args, &config, &sections),
        Commands::Export(args) => cmd::export::run(args, &sections),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
