//! `JobRun`: ejecución de entries individuales dentro de un run.
//!
//! El run es dueño de la bandera de parada y del log de eventos. No decide
//! orden ni ramas entre entries: el host llama `run_entry` por cada paso.

use std::collections::HashMap;

use uuid::Uuid;

use crate::clock::Clock;
use crate::config::RunnerConfig;
use crate::entry::{DiagnosticSink, EntryOutcome, EntryStatus, JobEntry};
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::model::EntryContext;
use crate::resolve::VariableResolver;
use crate::signal::StopFlag;

#[derive(Debug)]
pub struct JobRun<E = InMemoryEventStore>
    where E: EventStore
{
    run_id: Uuid,
    stop: StopFlag,
    event_store: E,
    statuses: HashMap<String, EntryStatus>,
    config: RunnerConfig,
}

impl JobRun<InMemoryEventStore> {
    /// Crea un run con store de eventos en memoria.
    pub fn new() -> Self { Self::with_store(InMemoryEventStore::default()) }
}

impl Default for JobRun<InMemoryEventStore> {
    fn default() -> Self { Self::new() }
}

impl<E> JobRun<E> where E: EventStore
{
    pub fn with_store(event_store: E) -> Self {
        Self { run_id: Uuid::new_v4(),
               stop: StopFlag::new(),
               event_store,
               statuses: HashMap::new(),
               config: RunnerConfig::default() }
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run_id(&self) -> Uuid { self.run_id }

    pub fn config(&self) -> RunnerConfig { self.config }

    /// Bandera compartida; puede entregarse a otros hilos para detener el run.
    pub fn stop_flag(&self) -> StopFlag { self.stop.clone() }

    /// Detiene el run. Los entries en espera lo observan en su próximo sondeo.
    pub fn stop(&mut self) {
        if !self.stop.is_set() {
            self.stop.stop();
            self.event_store.append_kind(self.run_id, RunEventKind::RunStopped);
            log::info!("run {} stopped", self.run_id);
        }
    }

    pub fn is_stopped(&self) -> bool { self.stop.is_set() }

    pub fn status(&self, entry_id: &str) -> EntryStatus {
        self.statuses.get(entry_id).copied().unwrap_or(EntryStatus::Pending)
    }

    pub fn events(&self) -> Vec<RunEvent> { self.event_store.list(self.run_id) }

    pub fn event_store(&self) -> &E { &self.event_store }

    /// Resultado de la última ejecución de `entry_id` en este run.
    pub fn last_result(&self, entry_id: &str) -> Option<bool> { self.event_store.last_result(self.run_id, entry_id) }

    /// Ejecuta `entry` en el hilo actual y registra sus eventos.
    pub fn run_entry(&mut self,
                     entry: &dyn JobEntry,
                     clock: &dyn Clock,
                     resolver: &dyn VariableResolver,
                     sink: Option<&dyn DiagnosticSink>)
                     -> EntryOutcome {
        let entry_id = entry.id().to_string();
        // Re-ejecutar un entry terminal vuelve a empezar desde Pending.
        self.transition(&entry_id, EntryStatus::Pending);
        self.transition(&entry_id, EntryStatus::Running);
        self.event_store.append_kind(self.run_id, RunEventKind::EntryStarted { entry_id: entry_id.clone() });
        log::debug!("run {} entry {} started", self.run_id, entry_id);

        let signal = self.stop.clone();
        let mut ctx = EntryContext::new(&signal, clock, resolver).with_config(self.config);
        if let Some(sink) = sink {
            ctx = ctx.with_sink(sink);
        }
        let outcome = entry.execute(&ctx);

        for d in &outcome.diagnostics {
            self.event_store.append_kind(self.run_id,
                                         RunEventKind::DiagnosticEmitted { entry_id: entry_id.clone(),
                                                                           level: d.level,
                                                                           message: d.message.clone() });
        }
        self.event_store.append_kind(self.run_id,
                                     RunEventKind::EntryFinished { entry_id: entry_id.clone(),
                                                                   succeeded: outcome.succeeded });
        let terminal = if outcome.succeeded { EntryStatus::FinishedOk } else { EntryStatus::Failed };
        self.transition(&entry_id, terminal);
        log::debug!("run {} entry {} finished succeeded={}", self.run_id, entry_id, outcome.succeeded);
        outcome
    }

    fn transition(&mut self, entry_id: &str, next: EntryStatus) {
        let current = self.status(entry_id);
        let applied = if next == EntryStatus::Pending {
            EntryStatus::Pending
        } else {
            match current.advance(next) {
                Some(s) => s,
                None => {
                    log::warn!("entry {entry_id}: unexpected transition {current:?} -> {next:?}");
                    next
                }
            }
        };
        self.statuses.insert(entry_id.to_string(), applied);
    }
}
