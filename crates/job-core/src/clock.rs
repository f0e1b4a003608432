//! Reloj inyectable.
//!
//! `SystemClock` lee la hora de pared vía `chrono`; `ManualClock` es
//! determinista y avanza sólo cuando se le pide dormir o avanzar.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;

use crate::errors::JobError;

pub trait Clock: Send + Sync {
    /// Milisegundos desde epoch.
    fn now_millis(&self) -> Result<u64, JobError>;

    /// Suspende el hilo llamador durante `duration`.
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Result<u64, JobError> {
        let ms = Utc::now().timestamp_millis();
        u64::try_from(ms).map_err(|_| JobError::Clock(format!("system time before epoch: {ms}ms")))
    }

    fn sleep(&self, duration: Duration) { std::thread::sleep(duration); }
}

/// Reloj simulado: `sleep` avanza el tiempo en lugar de bloquear.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
    sleeps: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: AtomicU64::new(start_ms),
               sleeps: AtomicU64::new(0) }
    }

    pub fn advance(&self, by: Duration) { self.now_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst); }

    pub fn set_millis(&self, ms: u64) { self.now_ms.store(ms, Ordering::SeqCst); }

    pub fn millis(&self) -> u64 { self.now_ms.load(Ordering::SeqCst) }

    /// Cantidad de llamadas a `sleep` (una por sondeo).
    pub fn sleep_count(&self) -> u64 { self.sleeps.load(Ordering::SeqCst) }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Result<u64, JobError> { Ok(self.millis()) }

    fn sleep(&self, duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.advance(duration);
    }
}
