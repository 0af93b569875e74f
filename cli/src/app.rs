use anyhow::{bail, Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use luxai_core::{LuxClient, SummaryLanguage, TargetLanguage};

use crate::controllers::{
    MeetingNotesController, SummarizerController, TranslatorController, MIN_INPUT_CHARS,
};
use crate::output;

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Resolve the input text from a positional argument, a file, or stdin.
async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read input from stdin")?;
    Ok(buffer)
}

pub async fn run_summarize(
    client: &LuxClient,
    text: Option<String>,
    file: Option<PathBuf>,
    language: SummaryLanguage,
) -> Result<()> {
    let input = read_input(text, file).await?;
    let mut controller = SummarizerController::new();
    controller.set_language(language);
    controller.set_input(input);

    if !controller.can_submit() {
        bail!(
            "Input must be at least {} characters ({} provided)",
            MIN_INPUT_CHARS,
            controller.input_chars()
        );
    }

    debug!("submitting {} chars for summarization", controller.input_chars());
    let spinner = spinner("Summarizing...");
    controller.submit(client).await;
    spinner.finish_and_clear();

    output::print_summary(&controller);
    Ok(())
}

pub async fn run_translate(
    client: &LuxClient,
    text: Option<String>,
    file: Option<PathBuf>,
    to: TargetLanguage,
) -> Result<()> {
    let input = read_input(text, file).await?;
    let mut controller = TranslatorController::new();
    controller.select_language(to);
    controller.set_input(input);

    if !controller.can_submit() {
        bail!("No text to translate");
    }

    let spinner = spinner("Translating...");
    controller.submit(client).await;
    spinner.finish_and_clear();

    output::print_translation(&controller);
    Ok(())
}

pub async fn run_meeting_notes(
    client: &LuxClient,
    file: Option<PathBuf>,
    transcript: Option<String>,
) -> Result<()> {
    let mut controller = MeetingNotesController::new();
    if let Some(path) = &file {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("transcript.txt")
            .to_string();
        controller.attach_file(&name, bytes)?;
    }
    if let Some(text) = transcript {
        controller.set_transcript(text);
    }

    if !controller.can_submit() {
        bail!("Provide a transcript file (--file) and/or pasted text (--transcript)");
    }

    submit_notes_with_progress(client, &mut controller).await;
    output::print_notes(&controller);
    Ok(())
}

/// Drive one meeting-notes submission while mirroring the controller's
/// upload percentage into a terminal progress bar.
async fn submit_notes_with_progress(client: &LuxClient, controller: &mut MeetingNotesController) {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .unwrap(),
    );
    bar.set_message("Uploading transcript...");

    let handle = controller.progress_handle();
    let watcher = {
        let bar = bar.clone();
        tokio::spawn(async move {
            loop {
                bar.set_position(handle.load(Ordering::Relaxed) as u64);
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        })
    };

    controller.submit(client).await;

    watcher.abort();
    bar.finish_and_clear();
}

pub async fn run_stats(client: &LuxClient) -> Result<()> {
    let spinner = spinner("Fetching statistics...");
    let stats = client.stats().await;
    spinner.finish_and_clear();

    match stats {
        Ok(stats) => {
            output::print_stats(&stats);
            Ok(())
        }
        Err(e) => bail!("Failed to fetch statistics: {}", e),
    }
}

pub async fn run_health(client: &LuxClient) -> Result<()> {
    let spinner = spinner("Checking backend...");
    let health = client.health().await;
    spinner.finish_and_clear();

    match health {
        Ok(health) => {
            println!(
                "{} {} ({})",
                "Backend reachable:".green().bold(),
                health.service,
                health.status
            );
            Ok(())
        }
        Err(e) => bail!("Backend health check failed: {}", e),
    }
}

/// Menu-driven session over all tools. Errors inside one tool are printed
/// and the menu continues.
pub async fn run_interactive(client: &LuxClient) -> Result<()> {
    println!("{}", "LuxAI productivity suite".bold());
    println!("Summarize, translate, and turn meetings into polished notes.");
    println!();

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick a tool")
            .items(&[
                "Summarizer",
                "Translator",
                "Meeting notes",
                "Productivity stats",
                "Backend health",
                "Quit",
            ])
            .default(0)
            .interact()?;

        let result = match choice {
            0 => interactive_summarize(client).await,
            1 => interactive_translate(client).await,
            2 => interactive_meeting_notes(client).await,
            3 => run_stats(client).await,
            4 => run_health(client).await,
            _ => break,
        };
        if let Err(e) = result {
            eprintln!("{}", format!("Error: {:#}", e).red());
        }
        println!();
    }

    Ok(())
}

async fn interactive_summarize(client: &LuxClient) -> Result<()> {
    let mut controller = SummarizerController::new();

    let languages: Vec<&str> = SummaryLanguage::ALL.iter().map(|l| l.as_str()).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Summary language")
        .items(&languages)
        .default(0)
        .interact()?;
    controller.set_language(SummaryLanguage::ALL[picked]);

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Text to summarize (minimum {} characters)", MIN_INPUT_CHARS))
        .interact_text()?;
    controller.set_input(text);

    if !controller.can_submit() {
        println!(
            "{}",
            format!(
                "Need at least {} characters, got {}.",
                MIN_INPUT_CHARS,
                controller.input_chars()
            )
            .yellow()
        );
        return Ok(());
    }

    let spinner = spinner("Summarizing...");
    controller.submit(client).await;
    spinner.finish_and_clear();

    output::print_summary(&controller);
    Ok(())
}

async fn interactive_translate(client: &LuxClient) -> Result<()> {
    let mut controller = TranslatorController::new();

    // The language picker mirrors the selector overlay: open, pick, close.
    controller.toggle_picker();
    let names: Vec<String> = TargetLanguage::ALL
        .iter()
        .map(|l| format!("{} ({})", l.name(), l.code()))
        .collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Target language")
        .items(&names)
        .default(0)
        .interact()?;
    controller.select_language(TargetLanguage::ALL[picked]);

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Text to translate")
        .allow_empty(true)
        .interact_text()?;
    controller.set_input(text);

    if !controller.can_submit() {
        println!("{}", "Nothing to translate.".yellow());
        return Ok(());
    }

    let spinner = spinner("Translating...");
    controller.submit(client).await;
    spinner.finish_and_clear();

    output::print_translation(&controller);
    Ok(())
}

async fn interactive_meeting_notes(client: &LuxClient) -> Result<()> {
    let mut controller = MeetingNotesController::new();

    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Transcript file (txt/pdf/docx, empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    if !path.is_empty() {
        let path = PathBuf::from(path);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("transcript.txt")
            .to_string();
        controller.attach_file(&name, bytes)?;
    }

    let transcript: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Pasted transcript (empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    controller.set_transcript(transcript);

    if !controller.can_submit() {
        println!("{}", "Provide a file or a transcript first.".yellow());
        return Ok(());
    }

    submit_notes_with_progress(client, &mut controller).await;
    output::print_notes(&controller);
    Ok(())
}
