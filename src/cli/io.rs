use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::errors::CommandError;

/// Yes/no prompt on the terminal.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
