use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages;

pub fn handle(cfg: &Config, id: i64) -> AppResult<()> {
    let store = store::open(cfg)?;

    match store.delete(id) {
        Ok(()) => {
            messages::success(format!("Entry {id} deleted"));
            Ok(())
        }
        Err(AppError::NotFound) => {
            messages::warning(format!("No entry with id {id}"));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
