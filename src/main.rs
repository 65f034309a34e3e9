//! mate main entrypoint.

use mate::run;
use mate::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        if e.is_user_facing() {
            warning(&e);
        } else {
            tracing::error!(error = %e, "command failed");
            error(&e);
        }
        std::process::exit(1);
    }
}
