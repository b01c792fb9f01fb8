//! Interactive prompts used by the CLI commands.

use crate::errors::AppResult;
use dialoguer::{Confirm, Input};

pub fn confirm(message: &str) -> AppResult<bool> {
    let answer = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(answer)
}

pub fn input(message: &str) -> AppResult<String> {
    let text: String = Input::new().with_prompt(message).interact_text()?;
    Ok(text)
}
