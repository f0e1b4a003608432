//! Frontera de persistencia de atributos de un entry.
//!
//! El host guarda/restaura la configuración de cada entry como atributos
//! con nombre en el almacén que use (archivo, repositorio, ...). El core no
//! define ningún formato: sólo el contrato y una implementación en memoria.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::JobError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
}

pub trait AttributeStore {
    fn get_string(&self, name: &str) -> Result<Option<String>, JobError>;
    fn get_integer(&self, name: &str) -> Result<Option<i64>, JobError>;
    fn set_string(&mut self, name: &str, value: &str) -> Result<(), JobError>;
    fn set_integer(&mut self, name: &str, value: i64) -> Result<(), JobError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryAttributeStore {
    pub inner: BTreeMap<String, AttributeValue>,
}

impl InMemoryAttributeStore {
    pub fn new() -> Self { Self::default() }
}

impl AttributeStore for InMemoryAttributeStore {
    fn get_string(&self, name: &str) -> Result<Option<String>, JobError> {
        Ok(self.inner.get(name).map(|v| match v {
                                   AttributeValue::Text(s) => s.clone(),
                                   AttributeValue::Integer(i) => i.to_string(),
                               }))
    }

    fn get_integer(&self, name: &str) -> Result<Option<i64>, JobError> {
        match self.inner.get(name) {
            None => Ok(None),
            Some(AttributeValue::Integer(i)) => Ok(Some(*i)),
            Some(AttributeValue::Text(s)) => s.trim()
                                               .parse::<i64>()
                                               .map(Some)
                                               .map_err(|_| JobError::InvalidAttribute { name: name.to_string(),
                                                                                         value: s.clone() }),
        }
    }

    fn set_string(&mut self, name: &str, value: &str) -> Result<(), JobError> {
        self.inner.insert(name.to_string(), AttributeValue::Text(value.to_string()));
        Ok(())
    }

    fn set_integer(&mut self, name: &str, value: i64) -> Result<(), JobError> {
        self.inner.insert(name.to_string(), AttributeValue::Integer(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_read_from_text_attribute() {
        let mut store = InMemoryAttributeStore::new();
        store.set_string("scaletime", " 2 ").unwrap();
        assert_eq!(store.get_integer("scaletime"), Ok(Some(2)));
    }

    #[test]
    fn non_numeric_text_is_invalid_integer() {
        let mut store = InMemoryAttributeStore::new();
        store.set_string("scaletime", "hours").unwrap();
        assert!(matches!(store.get_integer("scaletime"), Err(JobError::InvalidAttribute { .. })));
    }

    #[test]
    fn missing_attributes_are_none() {
        let store = InMemoryAttributeStore::new();
        assert_eq!(store.get_string("maximumTimeout"), Ok(None));
        assert_eq!(store.get_integer("scaletime"), Ok(None));
    }
}
