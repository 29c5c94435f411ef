use crossterm::tty::IsTty;
use crossterm::{ExecutableCommand, cursor, terminal};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

const TAG: &str = "[penguinui]";

pub struct Logger {
    start_time: Instant,
    quiet: bool,
    interactive: bool,
    color: bool,
    current_line: Arc<Mutex<String>>,
}

pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
}

impl Logger {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            interactive: io::stdout().is_tty(),
            color: colors_enabled(),
            current_line: Arc::new(Mutex::new(String::new())),
        }
    }

    fn clear_current_line(&self) {
        // Never write cursor control into piped output; `build` streams CSS there.
        if self.quiet || !self.interactive {
            return;
        }

        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::MoveToColumn(0));
        let _ = stdout.execute(terminal::Clear(terminal::ClearType::CurrentLine));
        let _ = stdout.flush();
    }

    pub fn update_line(&self, message: &str) {
        if self.quiet || !self.interactive {
            return;
        }

        self.clear_current_line();
        print!("{message}");
        let _ = io::stdout().flush();

        if let Ok(mut line) = self.current_line.lock() {
            *line = message.to_string();
        }
    }

    pub fn finish_line(&self, message: &str) {
        if self.quiet {
            return;
        }

        self.clear_current_line();
        eprintln!("{message}");

        if let Ok(mut line) = self.current_line.lock() {
            line.clear();
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.quiet && !matches!(level, LogLevel::Error) {
            return;
        }

        self.clear_current_line();

        if !self.color {
            eprintln!("{TAG} {message}");
            if let Ok(mut line) = self.current_line.lock() {
                line.clear();
            }
            return;
        }

        let tag = TAG.bright_cyan().bold().to_string();
        let colored_message = match level {
            LogLevel::Info => message.white().to_string(),
            LogLevel::Success => message.bright_green().to_string(),
            LogLevel::Warning => message.bright_yellow().bold().to_string(),
            LogLevel::Error => message.bright_red().to_string(),
            LogLevel::Debug => message.bright_black().to_string(),
        };

        // Diagnostics go to stderr so stdout stays clean for generated CSS.
        eprintln!("{tag} {colored_message}");

        if let Ok(mut line) = self.current_line.lock() {
            line.clear();
        }
    }

    pub fn finish(&self, message: &str) {
        let elapsed = self.start_time.elapsed();
        let time_str = if elapsed.as_millis() < 1000 {
            format!("{}ms", elapsed.as_millis())
        } else {
            format!("{:.2}s", elapsed.as_secs_f64())
        };

        let final_message = if self.color {
            format!(
                "{} {} {}",
                TAG.bright_cyan().bold(),
                message.bright_green(),
                format!("[{time_str}]").bright_black()
            )
        } else {
            format!("{TAG} {message} [{time_str}]")
        };

        self.finish_line(&final_message);
    }

    pub fn status(&self, message: &str) {
        let status_msg = format!("{} {}", "◦".bright_cyan(), message.bright_white());
        self.update_line(&status_msg);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: &str, debug_enabled: bool) {
        if debug_enabled {
            self.log(LogLevel::Debug, message);
        }
    }
}

/// Whether output should carry ANSI colors: stdout is a terminal, or
/// `FORCE_COLOR=1` is set.
#[must_use]
pub fn colors_enabled() -> bool {
    io::stdout().is_tty() || std::env::var("FORCE_COLOR").is_ok_and(|v| v == "1")
}

/// Formats one `list` line: package name and size in kilobytes, colored
/// only when [`colors_enabled`].
#[must_use]
pub fn format_package_line(name: &str, size_bytes: u64) -> String {
    package_line(name, size_bytes, colors_enabled())
}

fn package_line(name: &str, size_bytes: u64, color: bool) -> String {
    let size = format_size(size_bytes);
    if color {
        format!("{}\t{}", name.magenta(), size.bright_black())
    } else {
        format!("{name}\t{size}")
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size(size_bytes: u64) -> String {
    format!("{:.1}kb", size_bytes as f64 / 1024.0)
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

fn get_logger() -> &'static Logger {
    // Library callers (and tests) may never call init_logger.
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn update_line(message: &str) {
    get_logger().update_line(message);
}

pub fn status(message: &str) {
    get_logger().status(message);
}

pub fn info(message: &str) {
    get_logger().info(message);
}

pub fn success(message: &str) {
    get_logger().success(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    get_logger().debug(message, debug_enabled);
}

pub fn finish(message: &str) {
    get_logger().finish(message);
}

pub fn finish_line(message: &str) {
    get_logger().finish_line(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_rendered_in_kilobytes() {
        assert_eq!(format_size(0), "0.0kb");
        assert_eq!(format_size(1536), "1.5kb");
    }

    #[test]
    fn package_line_keeps_name_and_size() {
        let line = package_line("button", 2048, true);
        assert!(line.contains("button"));
        assert!(line.contains("2.0kb"));
        assert!(line.contains('\t'));
    }

    #[test]
    fn plain_package_line_has_no_escapes() {
        assert_eq!(package_line("button", 2048, false), "button\t2.0kb");
    }
}
