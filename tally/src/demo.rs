//! Demonstration run: pick the input list, sum it, render one line.

use std::path::Path;

use tally_common::config::{ConfigError, ConfigLoader, TallyConfig};
use tally_common::error::SumError;
use tally_common::sum::checked_sum_positive;
use tracing::debug;

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<TallyConfig, ConfigError> {
    let config = TallyConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Choose the list to sum.
///
/// Numbers given on the command line win over the config file, which
/// already carries the built-in default when its `[demo]` section omits
/// them.
pub fn select_numbers(cli_numbers: Vec<i64>, config: &TallyConfig) -> Vec<i64> {
    if cli_numbers.is_empty() {
        config.demo.numbers.clone()
    } else {
        cli_numbers
    }
}

/// Sum `numbers` and render the line printed to stdout.
///
/// On success: `Sum of [10, 5, 20] is: 35`. On failure: the error
/// message alone. A total that does not fit in `i64` is reported as an
/// overflow rather than printed wrapped.
pub fn render(numbers: &[i64]) -> String {
    match checked_sum_positive(numbers) {
        Ok(total) => format!("Sum of {numbers:?} is: {total}"),
        Err(SumError::Negative(e)) => {
            debug!(value = e.value, "summation rejected input");
            e.to_string()
        }
        Err(e @ SumError::Overflow { index }) => {
            debug!(index, "summation overflowed");
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_common::config::DemoConfig;

    #[test]
    fn test_render_default_list() {
        assert_eq!(render(&[10, 5, 20]), "Sum of [10, 5, 20] is: 35");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "Sum of [] is: 0");
    }

    #[test]
    fn test_render_error_only_message() {
        assert_eq!(render(&[1, -1, 5]), "Found a negative number: -1");
    }

    #[test]
    fn test_render_overflow_not_wrapped() {
        assert_eq!(
            render(&[i64::MAX, 1]),
            "Sum overflowed when adding element at index 1"
        );
    }

    #[test]
    fn test_render_negative_reported_before_overflow() {
        assert_eq!(
            render(&[i64::MAX, -3, 1]),
            "Found a negative number: -3"
        );
    }

    #[test]
    fn test_select_cli_wins() {
        let config = TallyConfig {
            demo: DemoConfig {
                numbers: vec![9, 9],
            },
            ..Default::default()
        };
        assert_eq!(select_numbers(vec![1], &config), vec![1]);
        assert_eq!(select_numbers(vec![], &config), vec![9, 9]);
    }

    #[test]
    fn test_select_builtin_default() {
        assert_eq!(
            select_numbers(vec![], &TallyConfig::default()),
            vec![10, 5, 20]
        );
    }
}
