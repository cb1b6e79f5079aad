//! Database access layer

pub mod employee;
