//! Modelos neutrales compartidos por host y entries.

pub mod context;

pub use context::EntryContext;
