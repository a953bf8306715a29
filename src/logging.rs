//! Test-only logger setup, mirroring the teacher's `mpi_log`/`simplelog`
//! convention (SPEC_FULL.md §A.1/§A.4). The library itself never calls
//! this; only `#[cfg(test)]` code and doctests may.

#[cfg(test)]
pub fn init_test_logging() {
    use log::LevelFilter;
    use simplelog::ColorChoice;
    use simplelog::Config;
    use simplelog::TermLogger;
    use simplelog::TerminalMode;

    let _ = TermLogger::init(LevelFilter::Trace, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
