//! Señal de parada cooperativa.
//!
//! El host decide cuándo detener un run; los entries sólo consultan la señal
//! en cada sondeo y nunca la modifican.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::JobError;

/// Consulta "¿el run que contiene a este entry fue detenido?".
pub trait CancellationSignal: Send + Sync {
    fn is_stopped(&self) -> Result<bool, JobError>;
}

/// Bandera compartida de parada. Los clones observan la misma bandera.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    inner: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self { Self::default() }

    pub fn stop(&self) { self.inner.store(true, Ordering::SeqCst); }

    pub fn is_set(&self) -> bool { self.inner.load(Ordering::SeqCst) }
}

impl CancellationSignal for StopFlag {
    fn is_stopped(&self) -> Result<bool, JobError> { Ok(self.is_set()) }
}

/// Señal que nunca se activa.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStopped;

impl CancellationSignal for NeverStopped {
    fn is_stopped(&self) -> Result<bool, JobError> { Ok(false) }
}

/// Adapta un closure como señal de parada.
pub struct FnSignal<F>(pub F);

impl<F> CancellationSignal for FnSignal<F> where F: Fn() -> Result<bool, JobError> + Send + Sync
{
    fn is_stopped(&self) -> Result<bool, JobError> { (self.0)() }
}
