//! Contrato para la sustitución de variables en valores de configuración.
//!
//! Un `VariableResolver` recibe el texto crudo configurado en un entry y
//! devuelve el texto con las variables sustituidas. Se soportan las formas
//! `${NOMBRE}` y `%%NOMBRE%%`; las variables desconocidas quedan intactas.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}|%%([^%]+)%%").expect("variable pattern compiles"));

pub trait VariableResolver: Send + Sync {
    fn resolve(&self, raw: &str) -> String;
}

/// Sustituye cada token usando `lookup`; si no hay valor deja el token tal cual.
pub fn substitute(raw: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    VARIABLE_PATTERN.replace_all(raw, |caps: &Captures| {
                        let name = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()).unwrap_or_default();
                        lookup(name).unwrap_or_else(|| caps[0].to_string())
                    })
                    .into_owned()
}

/// Resolvedor sin variables: devuelve el texto sin cambios.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableResolver for NoVariables {
    fn resolve(&self, raw: &str) -> String { raw.to_string() }
}

/// Variables definidas por el host (p. ej. parámetros del job).
#[derive(Debug, Clone, Default)]
pub struct MapVariableResolver {
    pub vars: HashMap<String, String>,
}

impl MapVariableResolver {
    pub fn new() -> Self { Self::default() }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl VariableResolver for MapVariableResolver {
    fn resolve(&self, raw: &str) -> String { substitute(raw, |name| self.vars.get(name).cloned()) }
}

/// Variables del entorno del proceso.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVariableResolver;

impl VariableResolver for EnvVariableResolver {
    fn resolve(&self, raw: &str) -> String { substitute(raw, |name| std::env::var(name).ok()) }
}
