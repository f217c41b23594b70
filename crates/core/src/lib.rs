//! # Registrar Core
//!
//! Domain types shared by the storage and HTTP layers: request and response
//! models for every record kind, the error taxonomy, and the timetable
//! scheduling rules.
//!
//! The timetable conflict check lives in [`conflict`] and is a pure function
//! over its inputs. [`scheduling`] composes it with a [`scheduling::TimetableStore`]
//! so that callers decide where slots are read from and written to.

pub mod conflict;
pub mod errors;
pub mod mock;
pub mod models;
pub mod params;
pub mod scheduling;
pub mod validation;
