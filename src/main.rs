//! bikeshare main entrypoint.

use bikeshare::run;
use bikeshare::ui::messages;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
