//! Badge Maker - fills a Word name-badge template
//!
//! Entry point: logging, settings, and dispatch to the interactive form or
//! the one-shot commands.

mod cli;
mod commands;
mod dialogs;
mod form;
mod opener;
mod state;
mod template;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, GenerateArgs, LocationArgs};
use commands::{generate_badge, GenerationContext};
use dialogs::{Dialogs, TerminalDialogs};
use mail_merge::{BadgeMode, BadgeRequest};
use opener::SystemLauncher;
use state::{FormAction, FormField, FormState};
use std::path::PathBuf;
use std::process::ExitCode;
use store::{BadgeSettings, SettingsManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Directory under the user's config dir holding the settings file
const CONFIG_DIR_NAME: &str = "badge-maker";

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new(default_config_dir()?),
    };
    let settings_path = settings.settings_path().to_path_buf();
    settings
        .load()
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;
    tracing::debug!("Using settings from {}", settings_path.display());

    match cli.command {
        Some(Commands::Generate(args)) => run_generate(&args, settings.get()),
        Some(Commands::Form(location)) => run_form(&location, settings.get()),
        Some(Commands::Config { init }) => run_config(&mut settings, init),
        None => run_form(&LocationArgs::default(), settings.get()),
    }
}

fn default_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .context("Cannot determine the configuration directory; pass --config")
}

fn generation_context(location: &LocationArgs, settings: &BadgeSettings) -> GenerationContext {
    let template = template::resolve_template(location.template.as_deref(), settings);
    let output_dir = location
        .output_dir
        .clone()
        .or_else(|| settings.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    GenerationContext::new(template, output_dir)
}

/// Build the request for a one-shot generation
///
/// `--single` forces a one-person badge; otherwise the configured default
/// mode applies. Values go through the same validation as the form.
fn request_from_args(
    args: &GenerateArgs,
    settings: &BadgeSettings,
) -> std::result::Result<BadgeRequest, state::ValidationError> {
    let mode = if args.single {
        BadgeMode::OnePerson
    } else {
        settings.default_mode
    };

    let mut form = FormState::from_settings(settings);
    form.update(FormAction::SetMode(mode));
    form.update(FormAction::SetField(FormField::Name1, args.name1.clone()));
    form.update(FormAction::SetField(FormField::Company1, args.company1.clone()));
    form.update(FormAction::SetField(FormField::Name2, args.name2.clone().unwrap_or_default()));
    form.update(FormAction::SetField(FormField::Company2, args.company2.clone().unwrap_or_default()));
    let add_spaces = if args.spaces {
        true
    } else if args.no_spaces {
        false
    } else {
        settings.add_spaces
    };
    form.update(FormAction::SetAddSpaces(add_spaces));
    form.update(FormAction::SetAutoOpen(!args.no_open && settings.auto_open));
    form.validate()
}

fn run_generate(args: &GenerateArgs, settings: &BadgeSettings) -> Result<ExitCode> {
    let mut dialogs = TerminalDialogs::new(std::io::stderr());
    let request = match request_from_args(args, settings) {
        Ok(request) => request,
        Err(e) => {
            dialogs.warning("Notice", &e.to_string());
            return Ok(ExitCode::from(2));
        }
    };

    let ctx = generation_context(&args.location, settings);
    let auto_open = !args.no_open && settings.auto_open;
    match generate_badge(&ctx, &request, auto_open, &mut dialogs, &SystemLauncher) {
        Ok(result) => {
            println!("{}", result.output_path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn run_form(location: &LocationArgs, settings: &BadgeSettings) -> Result<ExitCode> {
    let ctx = generation_context(location, settings);
    let mut state = FormState::from_settings(settings);
    let mut dialogs = TerminalDialogs::new(std::io::stderr());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    form::run_form(
        stdin.lock(),
        &mut stdout,
        &mut state,
        &ctx,
        &mut dialogs,
        &SystemLauncher,
    )
    .context("Form input failed")?;

    Ok(ExitCode::SUCCESS)
}

fn run_config(settings: &mut SettingsManager, init: bool) -> Result<ExitCode> {
    if init {
        settings.reset();
        settings
            .save()
            .with_context(|| format!("Failed to write {}", settings.settings_path().display()))?;
        tracing::info!("Wrote default settings to {}", settings.settings_path().display());
    }

    println!("# {}", settings.settings_path().display());
    println!("{}", serde_json::to_string_pretty(settings.get())?);
    Ok(ExitCode::SUCCESS)
}
