//! Shell command handler

use super::load_gradebook;
use cgpa_calc::config::Config;
use cgpa_calc::core::shell;
use logger::error;
use std::io::{self, IsTerminal};
use std::path::Path;

/// Run an interactive session on stdin/stdout
pub fn run(catalog: Option<&Path>, config: &Config) {
    let mut book = match load_gradebook(catalog, config) {
        Ok(book) => book,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        let name = &book.curriculum().name;
        println!("cgpacalc {} - {name}", cgpa_calc::get_version());
        println!("Type 'help' for commands, 'quit' to leave.");
    }

    let mut stdout = io::stdout();
    if let Err(e) = shell::run(&mut book, stdin.lock(), &mut stdout, interactive) {
        error!("Shell session aborted: {e}");
        eprintln!("✗ Shell session aborted: {e}");
        std::process::exit(1);
    }
}
