use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store;
use crate::ui::messages;
use chrono::Utc;

/// Record a completed activity spanning `duration` counted from now.
pub fn handle(cfg: &Config, message: Option<&str>, duration: &str) -> AppResult<()> {
    let now = Utc::now();

    let mut entry = Entry::new(message.unwrap_or_default());
    entry.set_duration(duration, now)?;

    let store = store::open(cfg)?;
    let saved = store.insert(&entry)?;

    messages::success(format!(
        "Activity added: {} | {}",
        saved.message,
        saved.time_string(now)
    ));
    Ok(())
}
