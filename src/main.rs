use clap::Parser;
use todos::cli::commands::{Cli, Commands};
use todos::io::{config_io, logging};
use todos::model::Config;

fn main() {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        // No subcommand → launch TUI
        None => todos::tui::run(&config),
        Some(Commands::Config) => config_io::render_config(&config)
            .map(|text| print!("{}", text))
            .map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = config_io::load_config(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    logging::init_logging(&config.log)?;
    Ok(config)
}
