//! doing CLI entrypoint.

use doing::run;
use doing::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
