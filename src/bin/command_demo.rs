// Command pattern demo
// Run with: cargo run --bin command_demo [-- --locale polish]

use clap::Parser;
use command_memento::demo::run_command_demo;
use command_memento::{DemoConfig, Locale, Narrator, logging};

#[derive(Parser, Debug)]
#[command(about = "Invoker running a simple and a receiver-backed command")]
struct Args {
    /// Language of the narration
    #[arg(short, long, value_enum, default_value_t = Locale::English)]
    locale: Locale,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(env!("CARGO_CRATE_NAME"), args.verbose);

    let config = DemoConfig {
        locale: args.locale,
        ..DemoConfig::default()
    };
    log::info!("Running command demo with {:?}", config.locale);

    let narrator = Narrator::stdout().with_locale(config.locale);
    run_command_demo(&narrator)?;

    Ok(())
}
