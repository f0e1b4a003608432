//! JobFlow Rust Library
//!
//! Este crate actúa como la fachada del workspace:
//! - Reexporta `job_core` (contratos del host: entries, run, capacidades).
//! - Reexporta `job_entries` (entries concretos, p. ej. `DelayEntry`).
//!
//! Puede usarse por hosts que ejecutan jobs sin depender de cada crate.

pub use job_core;
pub use job_entries;

/// Tipos de uso frecuente para montar un host mínimo.
pub mod prelude {
	pub use job_core::{CancellationSignal, Clock, EntryContext, EntryOutcome, JobEntry, JobRun, RunnerConfig, StopFlag,
	                   SystemClock, VariableResolver};
	pub use job_entries::{DelayEntry, TimeUnit, WaitConfig, WaitOutcome};
}

#[cfg(test)]
mod tests {
	use super::prelude::*;

	#[test]
	fn prelude_builds_a_delay_entry() {
		let entry = DelayEntry::new("pause").with_config(WaitConfig::new("3", TimeUnit::Minutes));
		assert_eq!(entry.id(), "pause");
		assert_eq!(entry.config.unit.multiplier_ms(), 60_000);
	}
}
