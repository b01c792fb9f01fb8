use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Initialize configuration and database files.
pub fn handle() -> AppResult<()> {
    Config::init_all()?;

    messages::success(format!("Config file: {}", Config::config_file().display()));
    messages::success(format!("Database:    {}", Config::database_file().display()));
    Ok(())
}
