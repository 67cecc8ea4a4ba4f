//! Scripted demo run of the servo tools against the mock controller.
//!
//! Reads an optional TOML config from `SERVO_DEMO_CONFIG`. Always exits 0,
//! even when the console cannot be written to.

use std::io::{self, Write};

use servo_mcp::config::{load_from_env, CONFIG_ENV_VAR};
use servo_mcp::scenario::{install_ctrl_c_handler, InterruptFlag, Pacer, StdDelay};
use servo_mcp::{Error, MockController, RunReport, ScenarioSuite, SystemConfig, TestDriver};

fn main() {
    env_logger::init();

    let config = match load_from_env() {
        Ok(Some(config)) => config,
        Ok(None) => SystemConfig::default(),
        Err(e) => {
            let _ = writeln!(io::stderr(), "Ignoring {}: {}", CONFIG_ENV_VAR, e);
            SystemConfig::default()
        }
    };

    let interrupt = install_ctrl_c_handler().unwrap_or_else(|e| {
        log::warn!("Ctrl-C handler unavailable: {}", e);
        InterruptFlag::new()
    });

    let outcome = run(&config, interrupt);
    report_outcome(&mut io::stdout(), &mut io::stderr(), &outcome);
}

fn run(config: &SystemConfig, interrupt: InterruptFlag) -> servo_mcp::Result<RunReport> {
    let suite = ScenarioSuite::builtin()?;
    let mut controller = MockController::from_config(&config.servo);
    let pacer = Pacer::new(StdDelay, config.pacing, interrupt);

    let stdout = io::stdout();
    let mut driver = TestDriver::new(&mut controller, pacer, stdout.lock());
    driver.run_suite(&suite)
}

/// Closing line for a run that did not complete, if any.
fn outcome_message(outcome: &servo_mcp::Result<RunReport>) -> Option<String> {
    match outcome {
        Ok(report) => {
            log::info!(
                "run finished: {} calls, {} mismatches",
                report.calls,
                report.mismatches.len()
            );
            None
        }
        Err(Error::Interrupted) => Some("Test interrupted by user".to_string()),
        Err(e) => Some(format!("Error during test: {}", e)),
    }
}

/// Report the outcome on `out`, or on `fallback` if `out` is unwritable.
/// Write failures on both are dropped.
fn report_outcome<W: Write, F: Write>(
    out: &mut W,
    fallback: &mut F,
    outcome: &servo_mcp::Result<RunReport>,
) {
    if let Some(message) = outcome_message(outcome) {
        if writeln!(out, "\n{}", message).is_err() {
            let _ = writeln!(fallback, "\n{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_interrupt_reported_distinctly() {
        let mut out = Vec::new();
        report_outcome(&mut out, &mut BrokenPipe, &Err(Error::Interrupted));
        assert_eq!(String::from_utf8(out).unwrap(), "\nTest interrupted by user\n");
    }

    #[test]
    fn test_completed_run_prints_nothing_more() {
        let mut out = Vec::new();
        report_outcome(&mut out, &mut BrokenPipe, &Ok(RunReport::default()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_broken_stdout_falls_back() {
        let outcome = Err(Error::Output("Broken pipe (os error 32)".to_string()));
        let mut fallback = Vec::new();
        report_outcome(&mut BrokenPipe, &mut fallback, &outcome);

        assert_eq!(
            String::from_utf8(fallback).unwrap(),
            "\nError during test: Output error: Broken pipe (os error 32)\n"
        );
    }

    #[test]
    fn test_both_streams_broken_does_not_panic() {
        let outcome = Err(Error::Output("Broken pipe".to_string()));
        report_outcome(&mut BrokenPipe, &mut BrokenPipe, &outcome);
        report_outcome(&mut BrokenPipe, &mut BrokenPipe, &Err(Error::Interrupted));
    }
}
