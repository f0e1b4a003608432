/// Estado de un entry en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Pending` -> `Running`
/// - `Running` -> `FinishedOk`
/// - `Running` -> `Failed`
///
/// No se permiten reversiones o saltos arbitrarios entre estados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EntryStatus {
    /// El entry está pendiente de ejecución.
    Pending,
    /// El entry está en ejecución.
    Running,
    /// El entry finalizó correctamente.
    FinishedOk,
    /// El entry falló o fue abortado.
    Failed,
}

impl EntryStatus {
    pub fn is_terminal(self) -> bool { matches!(self, EntryStatus::FinishedOk | EntryStatus::Failed) }

    /// Aplica una transición; devuelve `None` si no es válida.
    pub fn advance(self, next: EntryStatus) -> Option<EntryStatus> {
        match (self, next) {
            (EntryStatus::Pending, EntryStatus::Running)
            | (EntryStatus::Running, EntryStatus::FinishedOk)
            | (EntryStatus::Running, EntryStatus::Failed) => Some(next),
            _ => None,
        }
    }
}
