//! Bucle de espera del `DelayEntry`.
//!
//! Estados: `Running -> {Elapsed, Cancelled}`. El tiempo se mide en unidades
//! enteras (`now_ms / multiplicador`), por lo que el inicio se trunca al
//! borde de la unidad y la espera efectiva puede ser hasta una unidad más
//! corta que la nominal. Una cota `0` sólo termina por parada.
//!
//! En cada sondeo la parada se consulta antes que el tiempo: si ambas
//! condiciones son ciertas en el mismo sondeo gana `Cancelled`.

use std::time::Duration;

use job_core::{CancellationSignal, Clock, JobError};

use super::unit::TimeUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    Running,
    Elapsed,
    Cancelled,
}

impl WaitState {
    pub fn is_terminal(self) -> bool { self != WaitState::Running }
}

pub struct WaitLoop<'a> {
    clock: &'a dyn Clock,
    signal: &'a dyn CancellationSignal,
    multiplier: u64,
    bound_units: u64,
    poll_interval: Duration,
}

impl<'a> WaitLoop<'a> {
    pub fn new(clock: &'a dyn Clock,
               signal: &'a dyn CancellationSignal,
               unit: TimeUnit,
               bound_units: u64,
               poll_interval: Duration)
               -> Self {
        Self { clock,
               signal,
               multiplier: unit.multiplier_ms(),
               bound_units,
               poll_interval: poll_interval.max(Duration::from_millis(1)) }
    }

    /// Bloquea el hilo llamador hasta un estado terminal.
    pub fn run(&self) -> Result<WaitState, JobError> {
        let time_start = self.clock.now_millis()? / self.multiplier;
        loop {
            let (state, now_ms) = self.poll(time_start)?;
            if state.is_terminal() {
                return Ok(state);
            }
            self.clock.sleep(self.next_sleep(time_start, now_ms));
        }
    }

    /// Evalúa una vez las condiciones de salida. Devuelve el estado y la
    /// lectura del reloj usada (0 si no se llegó a leer).
    pub fn poll(&self, time_start: u64) -> Result<(WaitState, u64), JobError> {
        if self.signal.is_stopped()? {
            return Ok((WaitState::Cancelled, 0));
        }
        let now_ms = self.clock.now_millis()?;
        let now = now_ms / self.multiplier;
        if self.bound_units > 0 && now >= time_start.saturating_add(self.bound_units) {
            return Ok((WaitState::Elapsed, now_ms));
        }
        Ok((WaitState::Running, now_ms))
    }

    /// Duerme un intervalo de sondeo, recortado al borde de unidad en que
    /// vence la cota para no pasarse del instante de salida.
    fn next_sleep(&self, time_start: u64, now_ms: u64) -> Duration {
        if self.bound_units == 0 {
            return self.poll_interval;
        }
        let deadline_ms = time_start.saturating_add(self.bound_units).saturating_mul(self.multiplier);
        let remaining = Duration::from_millis(deadline_ms.saturating_sub(now_ms).max(1));
        remaining.min(self.poll_interval)
    }
}
