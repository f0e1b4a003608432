use crate::attributes::AttributeStore;
use crate::errors::JobError;
use crate::model::EntryContext;

use super::check::CheckRemark;
use super::outcome::EntryOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind { Delay, Custom }

/// Trait que define un entry de job ejecutable por el host.
pub trait JobEntry {
    /// Identificador estable dentro del job.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str { self.id() }

    /// Tipo general del entry.
    fn kind(&self) -> EntryKind;

    /// Ejecuta el entry en el hilo llamador. Siempre devuelve un
    /// `EntryOutcome`; las fallas internas se reportan como diagnósticos.
    fn execute(&self, ctx: &EntryContext) -> EntryOutcome;

    /// Observaciones de validación previas al run.
    fn check(&self, remarks: &mut Vec<CheckRemark>);

    /// Guarda la configuración del entry como atributos con nombre.
    fn save_attributes(&self, store: &mut dyn AttributeStore) -> Result<(), JobError>;

    /// Restaura la configuración desde atributos con nombre.
    fn load_attributes(&mut self, store: &dyn AttributeStore) -> Result<(), JobError>;

    /// El resultado del entry decide la rama siguiente (éxito / falla).
    fn evaluates(&self) -> bool { true }

    /// El entry sigue siempre por la rama incondicional.
    fn is_unconditional(&self) -> bool { false }

    /// Si el host debe limpiar los errores del entry previo antes de ejecutar.
    fn reset_errors_before_execution(&self) -> bool { true }
}
