// UI layer: asks the README questions with `dialoguer`, then hands the
// answers to the pipeline while an `indicatif` spinner covers the lookup.

use crate::answers::{
    require_email, require_text, Answers, License, COMMAND_ERROR, DESCRIPTION_ERROR,
    PROJECT_NAME_ERROR, USERNAME_ERROR,
};
use crate::api::ProfileLookup;
use crate::config::Config;
use crate::pipeline::generate;
use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// Collect the answers, look up the avatar and write the README. Blocks on
/// the terminal and on the network; nothing is retried.
pub fn run(lookup: &dyn ProfileLookup, config: &Config) -> Result<()> {
    let answers = collect_answers().context("Failed to read answers from the terminal")?;

    let spinner = spinner(&format!("Looking up GitHub profile for {}...", answers.username));
    let result = generate(&answers, lookup, &config.output_path);
    spinner.finish_and_clear();

    let path = result.context("README was not generated")?;
    println!("{} {}", "✔ Wrote".green(), path.display());
    Ok(())
}

/// Ask every question in order. Invalid text re-prompts with a message;
/// a broken terminal aborts the whole run.
pub fn collect_answers() -> Result<Answers> {
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        bail!("an interactive terminal is required to answer the prompts");
    }

    let username = ask_text("What is your GitHub username?", USERNAME_ERROR)?;
    let email: String = Input::new()
        .with_prompt("What is your email?")
        .allow_empty(true)
        .validate_with(|input: &String| require_email(input))
        .interact_text()?;
    let project_name = ask_text("What is your project's name?", PROJECT_NAME_ERROR)?;
    let description = ask_text(
        "Please write a short description of your project:",
        DESCRIPTION_ERROR,
    )?;
    let license = ask_license()?;
    let dependencies_command = ask_text(
        "What command should be run to install dependencies?",
        COMMAND_ERROR,
    )?;
    let tests_command = ask_text("What command should be run to run tests?", COMMAND_ERROR)?;
    let usage_notes = ask_text(
        "What does the user need to know about using the repo?",
        DESCRIPTION_ERROR,
    )?;
    let contributing_notes = ask_text(
        "What does the user need to know about contributing to the repo?",
        DESCRIPTION_ERROR,
    )?;

    Ok(Answers {
        username,
        email,
        project_name,
        description,
        license,
        dependencies_command,
        tests_command,
        usage_notes,
        contributing_notes,
    })
}

/// Free-text prompt that keeps asking until the answer is non-empty.
fn ask_text(prompt: &str, error: &'static str) -> Result<String> {
    // Empty input is allowed through so the validator can explain itself.
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(move |input: &String| require_text(input, error))
        .interact_text()?;
    Ok(value)
}

/// `Select` only returns indices into the list, so no validation is needed.
fn ask_license() -> Result<License> {
    let names: Vec<&str> = License::ALL.iter().map(|l| l.name()).collect();
    let selection = Select::new()
        .with_prompt("What kind of license should your project have?")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(License::ALL[selection])
}

/// Spinner shown while waiting on the network.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
