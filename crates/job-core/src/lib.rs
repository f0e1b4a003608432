//! job-core: contratos del host para entries de job.
//!
//! El host ejecuta entries de forma síncrona en el hilo llamador y les
//! entrega capacidades inyectadas (señal de parada, reloj, resolvedor de
//! variables, sink de diagnósticos). Los entries siempre devuelven un
//! `EntryOutcome`.
pub mod attributes;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entry;
pub mod errors;
pub mod event;
pub mod model;
pub mod resolve;
pub mod run;
pub mod signal;

pub use attributes::{AttributeStore, AttributeValue, InMemoryAttributeStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{init_dotenv, RunnerConfig};
pub use entry::{CheckRemark, CheckSeverity, CollectingSink, Diagnostic, DiagnosticLevel, DiagnosticSink, EntryKind,
                EntryOutcome, EntryStatus, JobEntry};
pub use errors::JobError;
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::EntryContext;
pub use resolve::{EnvVariableResolver, MapVariableResolver, NoVariables, VariableResolver};
pub use run::JobRun;
pub use signal::{CancellationSignal, FnSignal, NeverStopped, StopFlag};
