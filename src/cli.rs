//! Command-line surface of the `weekend-days` binary.
//!
//! [`execute`] holds everything the binary does besides printing and picking
//! an exit code, so it can be tested without spawning a process.

use clap::{ArgAction, Parser};
use tracing::{debug, info};

use crate::{CalendarDate, DateRange, ParseError, prelude::*};

/// Printed to stdout whenever the arguments are missing, extra, or not valid dates.
pub const USAGE: &str = "Usage: weekend-days YYYY-MM-DD YYYY-MM-DD";

#[derive(Debug, Parser)]
#[command(
    name = "weekend-days",
    version,
    about = "Count the Saturdays and Sundays between two dates, inclusive"
)]
pub struct Cli {
    /// First date of the period (YYYY-MM-DD)
    #[arg(value_name = "START_DATE")]
    pub start: String,

    /// Last date of the period (YYYY-MM-DD); swapped with START_DATE if earlier
    #[arg(value_name = "END_DATE")]
    pub end: String,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid date {input:?}")]
    InvalidDate {
        input:  String,
        #[source]
        source: ParseError,
    },
}

/// Result of a successful run; displays as the line the binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "The period between {start} and {end} includes {weekend_days} weekend days.")]
pub struct Report {
    pub start:        CalendarDate,
    pub end:          CalendarDate,
    pub weekend_days: u64,
}

/// Validates both arguments, puts them in chronological order and counts
/// the weekend days between them.
///
/// # Errors
/// Returns `CliError::InvalidDate` for the first argument that is not a
/// canonical `YYYY-MM-DD` date.
pub fn execute(start: &str, end: &str) -> Result<Report, CliError> {
    let start = parse_arg(start)?;
    let end = parse_arg(end)?;

    let range = DateRange::normalized(start, end);
    if range.start() != start {
        debug!("start date is after end date, swapped to {range}");
    }

    let weekend_days = range.weekend_days();
    info!(%range, weekend_days, "counted weekend days");

    Ok(Report {
        start: range.start(),
        end: range.end(),
        weekend_days,
    })
}

fn parse_arg(input: &str) -> Result<CalendarDate, CliError> {
    input.parse().map_err(|source: ParseError| {
        info!("rejecting {input:?}: {source}");
        CliError::InvalidDate {
            input: input.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_counts_one_week() {
        let report = execute("2024-01-01", "2024-01-07").unwrap();
        assert_eq!(report.weekend_days, 2);
        assert_eq!(
            report.to_string(),
            "The period between 2024-01-01 and 2024-01-07 includes 2 weekend days."
        );
    }

    #[test]
    fn execute_single_weekday() {
        let report = execute("2024-01-01", "2024-01-01").unwrap();
        assert_eq!(
            report.to_string(),
            "The period between 2024-01-01 and 2024-01-01 includes 0 weekend days."
        );
    }

    #[test]
    fn execute_swaps_reversed_dates() {
        let report = execute("2024-01-07", "2024-01-01").unwrap();
        assert_eq!(report.start.to_string(), "2024-01-01");
        assert_eq!(report.end.to_string(), "2024-01-07");
        assert_eq!(report, execute("2024-01-01", "2024-01-07").unwrap());
    }

    #[test]
    fn execute_rejects_invalid_start() {
        let err = execute("2024-1-1", "2024-01-07").unwrap_err();
        match err {
            CliError::InvalidDate { input, source } => {
                assert_eq!(input, "2024-1-1");
                assert!(matches!(source, ParseError::InvalidWidth { .. }));
            }
        }
    }

    #[test]
    fn execute_rejects_invalid_end() {
        let err = execute("2024-01-01", "2023-02-29").unwrap_err();
        assert_eq!(err.to_string(), "invalid date \"2023-02-29\"");
    }

    #[test]
    fn parse_two_dates() {
        let cli = Cli::try_parse_from(["weekend-days", "2024-01-01", "2024-01-07"]).unwrap();
        assert_eq!(cli.start, "2024-01-01");
        assert_eq!(cli.end, "2024-01-07");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_verbosity_flag() {
        let cli =
            Cli::try_parse_from(["weekend-days", "-vv", "2024-01-01", "2024-01-07"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["weekend-days"]).is_err());
        assert!(Cli::try_parse_from(["weekend-days", "2024-01-01"]).is_err());
        assert!(
            Cli::try_parse_from(["weekend-days", "2024-01-01", "2024-01-02", "2024-01-03"])
                .is_err()
        );
    }

    #[test]
    fn help_is_not_an_argument_error() {
        let err = Cli::try_parse_from(["weekend-days", "--help"]).unwrap_err();
        assert!(!err.use_stderr());

        let err = Cli::try_parse_from(["weekend-days", "2024-01-01"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
