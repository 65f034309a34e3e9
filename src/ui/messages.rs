use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn prefix(color: &str, tty: bool) -> String {
    if tty {
        format!("{color}{BOLD}")
    } else {
        String::new()
    }
}

fn suffix(tty: bool) -> &'static str {
    if tty { RESET } else { "" }
}

pub fn info<T: fmt::Display>(msg: T) {
    let tty = std::io::stdout().is_terminal();
    println!("{}{msg}{}", prefix(FG_BLUE, tty), suffix(tty));
}

pub fn success<T: fmt::Display>(msg: T) {
    let tty = std::io::stdout().is_terminal();
    println!("{}{msg}{}", prefix(FG_GREEN, tty), suffix(tty));
}

pub fn warning<T: fmt::Display>(msg: T) {
    let tty = std::io::stdout().is_terminal();
    println!("{}{msg}{}", prefix(FG_YELLOW, tty), suffix(tty));
}

pub fn error<T: fmt::Display>(msg: T) {
    let tty = std::io::stderr().is_terminal();
    eprintln!("{}Error: {msg}{}", prefix(FG_RED, tty), suffix(tty));
}
