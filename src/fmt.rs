//! Human-readable log output for status codes and the errors they produce.

/// Where [`Logger`] sends rendered lines.
#[derive(Debug, Clone)]
pub enum LogOutput {
    Log(log::Level),
    LogTarget(log::Level, String),
    StdOut,
    StdErr,
    #[cfg(feature = "log-to-file")]
    File(std::sync::Arc<parking_lot::Mutex<std::fs::File>>),
}

impl From<log::Level> for LogOutput {
    fn from(value: log::Level) -> Self {
        Self::Log(value)
    }
}

impl LogOutput {
    fn emit(&self, line: &str) {
        match self {
            LogOutput::Log(level) => log::log!(*level, "{}", line),
            LogOutput::LogTarget(level, target) => {
                log::log!(target: target, *level, "{}", line)
            }
            LogOutput::StdOut => println!("{}", line),
            LogOutput::StdErr => eprintln!("{}", line),
            #[cfg(feature = "log-to-file")]
            LogOutput::File(file) => {
                use std::io::Write;

                let mut file = file.lock();
                file.write_all(line.as_bytes()).ok();
                file.write_all(b"\n").ok();
            }
        }
    }
}

/// A single row of a [`Loggable`] block.
///
/// `level` is the indentation depth; the first item of a block is its title.
#[derive(Debug, Clone, PartialEq)]
pub struct LogItem {
    level: usize,
    title: String,
    value: Option<String>,
}

impl LogItem {
    pub fn new<T: Into<String>, V: Into<String>>(level: usize, title: T, value: Option<V>) -> Self {
        Self {
            level,
            title: title.into(),
            value: value.map(Into::into),
        }
    }
}

impl<T: ToString, V: ToString> From<(usize, T, V)> for LogItem {
    fn from((level, title, value): (usize, T, V)) -> Self {
        Self::new(level, title.to_string(), Some(value.to_string()))
    }
}

impl<T: ToString> From<(usize, T)> for LogItem {
    fn from((level, title): (usize, T)) -> Self {
        Self::new::<_, String>(level, title.to_string(), None)
    }
}

pub struct Logger;

impl Logger {
    pub fn log<T>(output: &LogOutput, loggable: &T)
    where
        T: Loggable,
    {
        Self::render(&loggable.as_log())
            .iter()
            .for_each(|line| output.emit(line));
    }

    /// Render `items` into lines: the first item is printed as-is, the
    /// remaining ones indented by level with their values right-aligned.
    pub fn render(items: &[LogItem]) -> Vec<String> {
        let mut lines = Vec::with_capacity(items.len());

        if let Some(title) = items.first() {
            lines.push(title.title.clone());
        }

        let right_align = items
            .iter()
            .skip(1)
            .map(|v| v.title.len())
            .max()
            .unwrap_or(0);

        for LogItem {
            level,
            title,
            value,
        } in items.iter().skip(1)
        {
            let front_padding = " ".repeat(level * 2);

            let line = match value {
                Some(value) => {
                    let value_padding = " ".repeat(right_align - title.len());
                    format!("{front_padding}{title}: {value_padding}{value}")
                }
                None => format!("{front_padding}{title}:"),
            };

            lines.push(line);
        }

        lines
    }
}

pub trait Loggable {
    fn as_log(&self) -> Vec<LogItem>;
}

#[macro_export]
macro_rules ! log_vec {
    [$($msg:tt)*] => {
        $crate::to_log!(vec: $($msg)*)
    }
}

#[macro_export]
#[doc(hidden)]
macro_rules! to_log {
    ([$($array:tt)*],) => {
        vec![$($array)*]
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr)) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr)) => {
        $crate::to_log!([$($array)* ($level, $title).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),], $($msg)*)
    };

    ([$($array:tt)*], ($level:literal, $title:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title).into(),], $($msg)*)
    };

    (vec: $($msg:tt)*) => {
        $crate::to_log!([], $($msg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusCode;

    #[test]
    fn status_code_block() {
        let lines = Logger::render(&StatusCode::IO_TIMEOUT.as_log());

        assert_eq!(
            lines,
            vec![
                "NT status",
                "  Name:  IO_TIMEOUT",
                "  Code:  0xC00000B5",
                "  Error: true",
            ]
        );
    }

    #[test]
    fn unknown_code_block() {
        let lines = Logger::render(&StatusCode::new(0xFFFF_FFFF).as_log());

        assert_eq!(lines[1], "  Name:  UNKNOWN");
        assert_eq!(lines[3], "  Error: false");
    }

    #[test]
    fn error_block() {
        let error = StatusCode::PENDING.as_error().unwrap();
        let lines = Logger::render(&error.as_log());

        assert_eq!(
            lines,
            vec!["NT status error", "  Name: PENDING", "  Code: 0x00000103"]
        );
    }

    #[test]
    fn items_without_value() {
        let items: Vec<LogItem> = log_vec![(0, "Title"), (1, "Section"), (2, "Key", 1)];

        assert_eq!(
            Logger::render(&items),
            vec!["Title", "  Section:", "    Key:     1"]
        );
    }

    #[test]
    fn render_empty() {
        assert!(Logger::render(&[]).is_empty());
    }

    #[test]
    fn log_through_facade() {
        let _ = pretty_env_logger::try_init();

        Logger::log(&log::Level::Debug.into(), &StatusCode::TIMEOUT);
        Logger::log(
            &LogOutput::LogTarget(log::Level::Trace, "ntstatus".into()),
            &StatusCode::TIMEOUT.as_error().unwrap(),
        );
    }

    #[cfg(feature = "log-to-file")]
    #[test]
    fn log_to_file() {
        let path = std::env::temp_dir().join(format!("ntstatus-log-{}.txt", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        let output = LogOutput::File(std::sync::Arc::new(parking_lot::Mutex::new(file)));

        Logger::log(&output, &StatusCode::BAD_NETWORK_NAME);
        drop(output);

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            written,
            "NT status\n  Name:  BAD_NETWORK_NAME\n  Code:  0xC00000CC\n  Error: true\n"
        );
    }
}
