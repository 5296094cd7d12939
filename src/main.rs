use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = taskpad::cli::Cli::parse();

    match cli.command.clone() {
        Some(taskpad::cli::CliCommand::Tui) | None => {
            let config = taskpad::config::from_cli(&cli)?;
            taskpad::tui::run(config)?;
        }
        Some(command) => {
            let config = taskpad::config::from_cli(&cli)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            taskpad::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
