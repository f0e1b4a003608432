//! job-entries: entries de job concretos sobre los contratos de `job-core`.
//!
//! Este crate provee:
//! - `DelayEntry`: espera acotada por una duración en segundos, minutos u
//!   horas, cancelable por la parada del run.
//!
//! Nota: los entries sólo conocen las capacidades que el host les inyecta en
//! `EntryContext`; no leen el reloj ni el entorno por su cuenta.

pub mod delay;

pub use delay::{DelayEntry, TimeUnit, WaitConfig, WaitOutcome};
