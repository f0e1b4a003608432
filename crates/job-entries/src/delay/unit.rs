//! Escala de tiempo del `DelayEntry`.
//!
//! Cada unidad se traduce a un multiplicador (milisegundos por unidad) y a
//! una etiqueta para diagnósticos. El enum es cerrado: no hay ruta de error.

use std::fmt;
use std::str::FromStr;

use job_core::JobError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    /// Milisegundos por unidad.
    pub const fn multiplier_ms(self) -> u64 {
        match self {
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "second(s)",
            TimeUnit::Minutes => "minute(s)",
            TimeUnit::Hours => "hour(s)",
        }
    }

    /// (multiplicador, etiqueta).
    pub const fn scale(self) -> (u64, &'static str) { (self.multiplier_ms(), self.label()) }

    /// Código persistido en el atributo `scaletime`.
    pub const fn code(self) -> i64 {
        match self {
            TimeUnit::Seconds => 0,
            TimeUnit::Minutes => 1,
            TimeUnit::Hours => 2,
        }
    }

    pub const fn from_code(code: i64) -> Option<TimeUnit> {
        match code {
            0 => Some(TimeUnit::Seconds),
            1 => Some(TimeUnit::Minutes),
            2 => Some(TimeUnit::Hours),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

impl FromStr for TimeUnit {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hour" | "hours" => Ok(TimeUnit::Hours),
            other => Err(JobError::Config(format!("unknown time unit '{other}'"))),
        }
    }
}
