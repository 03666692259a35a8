//! Use-Cases der Application-Layer-Orchestrierung.

pub mod display;
pub mod editing;
pub mod name_edit;
