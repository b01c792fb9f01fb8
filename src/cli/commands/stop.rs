use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::{self, EntryStore};
use crate::ui::{messages, prompt};
use chrono::Utc;

/// Finish the current activity, prompting for a message if none was ever
/// given.
pub fn handle(cfg: &Config, message: Option<&str>) -> AppResult<()> {
    let store = store::open(cfg)?;

    let Some(entry) = store.latest()?.filter(|e| e.open()) else {
        messages::warning("No active entry");
        return Ok(());
    };

    finish(store.as_ref(), entry, message)
}

/// Close `entry` now and persist it. Shared with `start`, which closes the
/// previous activity before opening a new one.
pub fn finish(store: &dyn EntryStore, mut entry: Entry, message: Option<&str>) -> AppResult<()> {
    if let Some(m) = message {
        entry.message = m.to_string();
    }
    if entry.message.is_empty() {
        entry.message = prompt::input("Enter a message for this entry")?;
    }

    let now = Utc::now();
    entry.end = Some(now);
    store.update(&entry)?;

    messages::success(format!(
        "Activity finished: {} | {}",
        entry.message,
        entry.time_string(now)
    ));
    Ok(())
}
