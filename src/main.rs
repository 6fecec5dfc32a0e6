use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{error, info};
use uuid_tui::app::AppState;
use uuid_tui::cli::{Cli, Commands};
use uuid_tui::clipboard::{SystemClipboard, copy_to_clipboard};
use uuid_tui::config::Config;
use uuid_tui::generator::{RandomUuidService, UuidFormat, UuidService};
use uuid_tui::logging::{self, LogTarget};
use uuid_tui::ui::{self, theme::Theme};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::New {
            count,
            format,
            upper,
        }) => {
            let _guard = logging::init(LogTarget::Stderr, &config.log_level);
            handle_new(&config, count, format, upper)?;
        }
        Some(Commands::Copy { format, upper }) => {
            let _guard = logging::init(LogTarget::Stderr, &config.log_level);
            handle_copy(&config, format, upper)?;
        }
        None => {
            // No command - launch TUI
            let _guard = logging::init(LogTarget::File, &config.log_level);
            info!(
                policy = ?config.revert_policy,
                delay_ms = config.revert_delay_ms,
                "Launching TUI"
            );

            let theme = Theme::from_config(&config);
            let state = AppState::new(
                Box::new(RandomUuidService),
                Box::new(SystemClipboard::new()),
                &config,
                theme,
            );

            ui::run_tui(state)?;
        }
    }

    Ok(())
}

fn handle_new(
    config: &Config,
    count: usize,
    format: Option<UuidFormat>,
    upper: bool,
) -> Result<()> {
    let format = format.unwrap_or(config.format);
    let uppercase = upper || config.uppercase;
    let mut service = RandomUuidService;

    for _ in 0..count {
        let uuid = service.generate().context("Failed to generate UUID")?;
        println!("{}", format.render(&uuid, uppercase));
    }

    Ok(())
}

fn handle_copy(config: &Config, format: Option<UuidFormat>, upper: bool) -> Result<()> {
    let format = format.unwrap_or(config.format);
    let uppercase = upper || config.uppercase;

    let uuid = RandomUuidService
        .generate()
        .context("Failed to generate UUID")?;
    let text = format.render(&uuid, uppercase);
    println!("{}", text);

    if cfg!(target_os = "linux") {
        eprintln!("Holding the clipboard until something else is copied (Ctrl-C to give up)");
    }

    if let Err(e) = copy_to_clipboard(&text) {
        error!(error = %e, "Clipboard write failed");
        bail!("Could not copy to clipboard: {}", e);
    }

    eprintln!("✓ {}", config.copied_label);
    Ok(())
}
