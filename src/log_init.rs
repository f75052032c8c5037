use simplelog::*;

/// Map the number of `-v` flags to a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
pub fn init(verbosity: u8) {
    let logger = TermLogger::init(
        level_for(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("logger not installed: {}", err);
    }
}
