//! Definiciones relacionadas a entries de job.
//!
//! Un entry es un paso que el host ejecuta dentro de un run. Este módulo
//! define:
//! - `JobEntry`: interfaz neutral usada por el host.
//! - `EntryOutcome` y `Diagnostic`: resultado por invocación.
//! - `CheckRemark`: observaciones de validación previa.
//! - `EntryStatus`: máquina de estados del entry dentro del run.

mod check;
pub mod definition;
mod outcome;
mod status;

pub use check::{CheckRemark, CheckSeverity};
pub use definition::{EntryKind, JobEntry};
pub use outcome::{CollectingSink, Diagnostic, DiagnosticLevel, DiagnosticSink, EntryOutcome};
pub use status::EntryStatus;
