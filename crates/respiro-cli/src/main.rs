use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "respiro", version, about = "1-minute breathing sessions in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a 60-second breathing session
    Session {
        /// Skip the background ambience for this session
        #[arg(long)]
        no_audio: bool,
        /// Emit the event stream as NDJSON instead of rendering
        #[arg(long)]
        json: bool,
    },
    /// Settings management
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Daily reminder management
    Reminder {
        #[command(subcommand)]
        action: commands::reminder::ReminderAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        None => commands::welcome::run(),
        Some(Commands::Session { no_audio, json }) => commands::session::run(no_audio, json),
        Some(Commands::Settings { action }) => commands::settings::run(action),
        Some(Commands::Reminder { action }) => commands::reminder::run(action),
        Some(Commands::Completions { shell }) => {
            commands::completions::run(shell, &mut Cli::command())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
