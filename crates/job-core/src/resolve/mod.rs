//! Resolución de variables (`${VAR}` / `%%VAR%%`) para valores configurados.

mod resolver;

pub use resolver::{substitute, EnvVariableResolver, MapVariableResolver, NoVariables, VariableResolver};
