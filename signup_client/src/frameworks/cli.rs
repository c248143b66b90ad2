use clap::Parser;
use console::style;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use std::path::PathBuf;

use crate::domain::{Field, FieldErrors, RegistrationInput};

/// Create an account on the configured authentication service.
#[derive(Parser, Debug, Default)]
#[command(name = "signup", version)]
pub struct Args {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Password confirmation (prompted when omitted)
    #[arg(long, env = "SIGNUP_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: Option<String>,

    /// Authentication service host, overrides AUTH_HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Storage file for the auth token, overrides SIGNUP_STORAGE_FILE
    #[arg(long, conflicts_with = "no_persist")]
    pub storage_file: Option<PathBuf>,

    /// Keep the token in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Never prompt; invalid input ends the run
    #[arg(long)]
    pub non_interactive: bool,
}

impl Args {
    // Values supplied up front; missing ones stay empty until prompted.
    pub fn initial_input(&self) -> RegistrationInput {
        RegistrationInput::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
            self.confirm_password.clone().unwrap_or_default(),
        )
    }
}

// Fields to ask for: the ones with errors, or the empty ones on the first pass.
// A confirmation error re-asks the password too, since either may be the typo.
pub fn fields_to_prompt(input: &RegistrationInput, errors: &FieldErrors) -> Vec<Field> {
    if errors.is_empty() {
        return Field::ALL
            .into_iter()
            .filter(|field| input.value(*field).is_empty())
            .collect();
    }
    Field::ALL
        .into_iter()
        .filter(|field| {
            errors.contains(*field)
                || (*field == Field::Password && errors.contains(Field::ConfirmPassword))
        })
        .collect()
}

pub fn prompt_field(field: Field, current: &str) -> Result<String, dialoguer::Error> {
    let theme = ColorfulTheme::default();
    if field.is_secret() {
        Password::with_theme(&theme)
            .with_prompt(field.label())
            .allow_empty_password(true)
            .interact()
    } else {
        Input::<String>::with_theme(&theme)
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for entry in errors.iter() {
        eprintln!(
            "  {} {}",
            style(format!("{}:", entry.field.label())).yellow(),
            entry.message
        );
    }
}

pub fn print_header() {
    eprintln!("{}", style("Create An Account").cyan().bold());
    eprintln!("{}", style("─".repeat(40)).dim());
}

pub fn print_login_hint(location: &str) {
    eprintln!(
        "{} {}",
        style("Already have an account? Login at").dim(),
        style(location).cyan()
    );
}
