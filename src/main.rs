use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tirepressure::store::StateStore;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bicycle tire pressure calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File the form state is saved to (defaults to the user config directory)
    #[arg(global = true, long)]
    state: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend front and rear pressures
    Calc(cmd::calc::CalcArgs),
    /// List the preset values each choice accepts
    Options(cmd::options::OptionsArgs),
    /// Print the saved form state
    Show,
    /// Forget the saved form state
    Reset,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let store = match &cli.state {
        Some(path) => StateStore::new(path),
        None => StateStore::in_default_location().unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        }),
    };

    let result = match cli.command {
        Commands::Calc(args) => {
            let Some(sub_matches) = matches.subcommand_matches("calc") else {
                unreachable!("clap matched the calc subcommand");
            };
            cmd::calc::run(args, sub_matches, &store)
        }
        Commands::Options(args) => {
            cmd::options::run(args);
            Ok(())
        }
        Commands::Show => cmd::state::show(&store),
        Commands::Reset => cmd::state::reset(&store),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
