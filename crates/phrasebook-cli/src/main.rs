#![forbid(unsafe_code)]

mod cli;
mod command_check;
mod command_export;
mod command_get;
mod command_keys;
mod config;
mod sources;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
