pub mod cast;
pub mod dump;
pub mod layout;
pub mod manifest_loader;
pub mod reflect;


use std::fmt::Display;

/// Report `err` and exit with status 1.
pub fn fail(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
