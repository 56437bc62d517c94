use chrono::Datelike;
use crate::OWNER_NAME;

/// Source of the "current year" shown in the footer.
///
/// This is the only value on the page that depends on the environment, so it
/// is passed down as a prop instead of being read ad hoc. Tests and the CLI
/// pin it with [`Clock::Fixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local calendar year of the system clock at render time.
    #[default]
    System,
    /// A pinned year.
    Fixed(i32),
}

impl Clock {
    pub fn current_year(self) -> i32 {
        match self {
            Clock::System => {
                let year = chrono::Local::now().year();
                tracing::trace!("Read year {} from system clock", year);
                year
            }
            Clock::Fixed(year) => year,
        }
    }
}

impl From<Option<i32>> for Clock {
    fn from(year: Option<i32>) -> Self {
        year.map_or(Clock::System, Clock::Fixed)
    }
}

/// Footer copyright text for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, OWNER_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_fixed_clock_returns_pinned_year() {
        assert_eq!(Clock::Fixed(2031).current_year(), 2031);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = chrono::Local::now().year();
        let year = Clock::System.current_year();
        let after = chrono::Local::now().year();
        assert!(year == before || year == after);
    }

    /// Collects every `log` record emitted in this test binary.
    struct CapturingLogger(Mutex<Vec<String>>);

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger(Mutex::new(Vec::new()));

    #[test]
    fn test_system_clock_read_reaches_log_without_subscriber() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let year = Clock::System.current_year();

        let records = LOGGER.0.lock().unwrap();
        let expected = format!("Read year {} from system clock", year);
        assert!(
            records.iter().any(|line| line.contains(&expected)),
            "missing clock record in {:?}",
            records
        );
    }

    #[test]
    fn test_clock_from_optional_year() {
        assert_eq!(Clock::from(None), Clock::System);
        assert_eq!(Clock::from(Some(1999)), Clock::Fixed(1999));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Aryan. All rights reserved.");
    }
}
