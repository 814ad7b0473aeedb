//! Vty output sink and command status codes.
//!
//! Command handlers write their output into a [`Vty`], which accumulates
//! text using the newline convention of the host shell session.

use std::fmt::{self, Write as _};

use crate::config::NewlineStyle;

/// Status returned by a CLI command to the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmdStatus {
    /// Command completed.
    Success,
    /// Command completed with a problem the user should see.
    Warning,
    /// No installed command matched the input.
    ErrNoMatch,
}

impl CmdStatus {
    /// Numeric status code as understood by the host shell.
    pub fn code(&self) -> i32 {
        match self {
            CmdStatus::Success => 0,
            CmdStatus::Warning => 1,
            CmdStatus::ErrNoMatch => 2,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CmdStatus::Success)
    }
}

/// Text output sink for one shell session.
#[derive(Debug, Clone)]
pub struct Vty {
    buf: String,
    newline: &'static str,
}

impl Vty {
    /// Creates a sink using `\n` line endings.
    pub fn new() -> Self {
        Self::with_newline(NewlineStyle::Lf)
    }

    /// Creates a sink using the given line ending.
    pub fn with_newline(style: NewlineStyle) -> Self {
        Self {
            buf: String::new(),
            newline: style.as_str(),
        }
    }

    /// Appends formatted text.
    pub fn out(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail
        let _ = self.buf.write_fmt(args);
    }

    /// Appends one line break.
    pub fn nl(&mut self) {
        self.buf.push_str(self.newline);
    }

    /// Appends formatted text followed by a line break.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        self.out(args);
        self.nl();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for Vty {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes formatted text to a [`Vty`].
#[macro_export]
macro_rules! vty_out {
    ($vty:expr, $($arg:tt)*) => {
        $vty.out(format_args!($($arg)*))
    };
}

/// Writes formatted text and a line break to a [`Vty`].
#[macro_export]
macro_rules! vty_line {
    ($vty:expr) => {
        $vty.nl()
    };
    ($vty:expr, $($arg:tt)*) => {
        $vty.line(format_args!($($arg)*))
    };
}
