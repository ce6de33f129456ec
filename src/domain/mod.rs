//! Domain Layer
//!
//! Pure types for the PyGrid deployment workflow, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Configuration document and its records
//! - `value_objects/` - Provider, application and encoding enums
//! - `ports/` - Interfaces for prompting and for the deployment API

pub mod entities;
pub mod ports;
pub mod value_objects;
