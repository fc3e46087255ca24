// Logging setup for the demo binaries
//
// The library only talks to the `log` facade. Binaries call `init` once;
// log records go to stderr so the narration on stdout stays untouched.

use log::LevelFilter;

/// Map a `-v` count onto a level filter (0 = warn)
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the filter string that would otherwise be set in RUST_LOG
pub fn filter_string(crates: &[&str], level: LevelFilter) -> String {
    let level_str = level.as_str().to_lowercase();
    crates
        .iter()
        .map(|name| format!("{}={}", name, level_str))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialise env_logger for this library and the calling binary
///
/// RUST_LOG wins over the verbosity flag.
pub fn init(bin_name: &str, verbose: u8) {
    let filter = filter_string(
        &[env!("CARGO_CRATE_NAME"), bin_name],
        level_from_verbosity(verbose),
    );

    let result =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
            .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(1), LevelFilter::Info);
        assert_eq!(level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_filter_string() {
        assert_eq!(
            filter_string(&["command_memento"], LevelFilter::Debug),
            "command_memento=debug"
        );
        assert_eq!(
            filter_string(&["a", "b"], LevelFilter::Warn),
            "a=warn,b=warn"
        );
    }
}
