use crate::cli::commands::stop;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store;
use crate::ui::{messages, prompt};

/// Start a new activity. If the latest entry is still open, offer to
/// finish it first; declining leaves everything untouched.
pub fn handle(cfg: &Config, message: Option<&str>) -> AppResult<()> {
    let store = store::open(cfg)?;

    if let Some(latest) = store.latest()? {
        if latest.open() {
            if !prompt::confirm(&format!("End activity ({})?", latest.message))? {
                return Ok(());
            }
            stop::finish(store.as_ref(), latest, None)?;
        }
    }

    let saved = store.insert(&Entry::new(message.unwrap_or_default()))?;

    if saved.message.is_empty() {
        messages::success("Activity started");
    } else {
        messages::success(format!("Activity started: {}", saved.message));
    }
    Ok(())
}
