//! SoundCue CLI entry point

use std::process::ExitCode;

use clap::Parser;

use sound_cue::cli::{
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging,
    presenter::Presenter,
    run_play, run_schema, PlayOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
use sound_cue::domain::ConfigError;
use sound_cue::infrastructure::TomlConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play { sound } => {
            let options = PlayOptions {
                sound: sound.into(),
                media_dir: cli.media_dir,
                silent: cli.silent,
            };
            run_play(options).await
        }
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = TomlConfigStore::new();
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::from(EXIT_SUCCESS),
                Err(e @ ConfigError::ValidationError { .. }) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Schema => run_schema(),
    }
}
