// SPDX-License-Identifier: GPL-3.0-only

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, ValueEnum, Eq, PartialEq)]
pub enum LoggingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
