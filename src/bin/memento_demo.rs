// Memento pattern demo
// Run with: cargo run --bin memento_demo [-- --seed 42]

use clap::Parser;
use command_memento::config::{
    DEFAULT_BACKUPS, DEFAULT_INITIAL_STATE, DEFAULT_NAME_PREVIEW_LEN, DEFAULT_STATE_LENGTH,
};
use command_memento::demo::run_memento_demo;
use command_memento::{DemoConfig, Narrator, logging};

#[derive(Parser, Debug)]
#[command(about = "Originator snapshots kept by a Caretaker, then rolled back")]
struct Args {
    /// Seed for the state generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Length of generated states
    #[arg(long, default_value_t = DEFAULT_STATE_LENGTH)]
    state_length: usize,

    /// Characters of state shown in snapshot names
    #[arg(long, default_value_t = DEFAULT_NAME_PREVIEW_LEN)]
    preview_len: usize,

    /// Number of backup/mutate rounds before rolling back
    #[arg(long, default_value_t = DEFAULT_BACKUPS)]
    backups: usize,

    /// Initial originator state
    #[arg(long, default_value = DEFAULT_INITIAL_STATE)]
    initial_state: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            state_length: args.state_length,
            name_preview_len: args.preview_len,
            backups: args.backups,
            initial_state: args.initial_state,
            ..DemoConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(env!("CARGO_CRATE_NAME"), args.verbose);

    let config = DemoConfig::from(args);
    log::info!("Running memento demo with {:?}", config);

    run_memento_demo(&config, &Narrator::stdout())?;

    Ok(())
}
