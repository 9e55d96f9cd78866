//! rraincast main entrypoint.

use rraincast::run;
use rraincast::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
