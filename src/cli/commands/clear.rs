use crate::cli::commands::list;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::{messages, prompt};

/// Empty the log, showing what is about to go.
pub fn handle(cfg: &Config, yes: bool) -> AppResult<()> {
    if !yes && !prompt::confirm("Delete all the entries?")? {
        return Ok(());
    }

    let store = store::open(cfg)?;
    list::print_entries(store.as_ref())?;
    store.truncate()?;

    messages::success("Entries deleted");
    Ok(())
}
