use log::LevelFilter;

/// Initialises logging to stderr. `RUST_LOG` directives apply on top of
/// the verbosity-derived default.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(convert_verbosity_to_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}

fn convert_verbosity_to_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
