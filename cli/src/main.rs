use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tempo_cli::commands;
use tempo_cli::logging;
use tempo_cli::session;
use tempo_cli::RunOverrides;
use tempo_core::{TimerDiscipline, TimerStore, TimerStoreExt};

#[derive(Parser)]
#[command(version, about = "Workout interval timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a timer (defaults to the stored selection)
    Run {
        #[arg(short, long)]
        discipline: Option<TimerDiscipline>,
        /// Effort phase seconds (emom, tabata, custom)
        #[arg(short, long)]
        effort: Option<u32>,
        /// Rest phase seconds (tabata, custom)
        #[arg(short, long)]
        rest: Option<u32>,
        /// Total seconds (countdown, amrap)
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        rounds: Option<u32>,
        /// Skip the 5 second pre-roll
        #[arg(long)]
        no_countdown: bool,
        /// Remember this configuration as the selection
        #[arg(long)]
        save: bool,
    },
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    /// Select a discipline's preset
    Select { discipline: TimerDiscipline },
    /// Toggle the persistent mini widget
    Widget {
        /// on/off, true/false, yes/no
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _guard = logging::init();
    let cli = Cli::parse();
    let mut store = TimerStore::load().map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Run {
            discipline,
            effort,
            rest,
            duration,
            rounds,
            no_countdown,
            save,
        } => {
            let overrides = RunOverrides {
                discipline,
                effort,
                rest,
                duration,
                rounds,
            };
            let config = commands::build_config(&mut store, &overrides)?;
            if save {
                store.save().map_err(|e| e.to_string())?;
            }
            session::run(config, !no_countdown).await
        }
        Commands::Config(ConfigCommand::Show) => {
            commands::show_config(&store);
            Ok(())
        }
        Commands::Config(ConfigCommand::Select { discipline }) => {
            commands::select_discipline(&mut store, discipline)
        }
        Commands::Config(ConfigCommand::Widget { enabled }) => {
            commands::set_widget(&mut store, enabled)
        }
    }
}
