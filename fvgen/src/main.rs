mod args;
mod dump;
mod generate;

use clap::Parser;

fn main() {
    tracing_subscriber::fmt::init();
    let cli = args::Cli::parse();
    match generate::run(&cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err:?}");
            std::process::exit(1);
        }
    }
}
