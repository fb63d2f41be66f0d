//! wakeup main entrypoint.

use wakeup::run;
use wakeup::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
