use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages;
use chrono::Utc;

/// Change the message and/or duration of an entry (the latest one when no
/// id is given).
pub fn handle(
    cfg: &Config,
    id: Option<i64>,
    message: Option<&str>,
    duration: Option<&str>,
) -> AppResult<()> {
    if message.is_none() && duration.is_none() {
        messages::warning("Nothing to change (pass --message and/or --time)");
        return Ok(());
    }

    let store = store::open(cfg)?;

    let found = match id {
        Some(id) => store.get(id),
        None => store.latest()?.ok_or(AppError::NotFound),
    };
    let mut entry = match found {
        Ok(entry) => entry,
        Err(AppError::NotFound) => {
            messages::warning("No entry to edit");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if let Some(m) = message {
        entry.message = m.to_string();
    }
    if let Some(spec) = duration {
        entry.set_duration(spec, Utc::now())?;
    }

    store.update(&entry)?;
    messages::success(format!("Entry {} updated", entry.id.unwrap_or(0)));
    Ok(())
}
