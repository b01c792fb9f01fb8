use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{self, EntryStore};
use crate::ui::messages;
use crate::utils::time::format_duration;
use chrono::{Duration, Utc};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = store::open(cfg)?;
    print_entries(store.as_ref())
}

/// Print every entry plus the summed total. Open entries keep counting,
/// so the total moves between invocations.
pub fn print_entries(store: &dyn EntryStore) -> AppResult<()> {
    let entries = store.all()?;
    let now = Utc::now();

    println!("\nAll Entries");
    println!("-------------------------------------");

    let mut total = Duration::zero();
    for entry in &entries {
        let line = format!(
            "-- {:<4} {:<12} {}",
            entry.id.unwrap_or(0),
            entry.time_string(now),
            entry.message
        );
        if entry.open() {
            println!("{}", messages::active(format!("{line} <= active")));
        } else {
            println!("{line}");
        }
        total = total + entry.duration(now);
    }

    println!("-------------------------------------");
    println!("Total - {}\n", format_duration(total));
    Ok(())
}
