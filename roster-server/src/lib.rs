//! roster-server — employee directory service
//!
//! A thin HTTP layer mapping CRUD verbs onto the `employees` table:
//! - JSON API under `/api/employees`
//! - Embedded HTML front end at `/`
//! - Health check at `/health`

pub mod api;
pub mod config;
pub mod db;
pub mod state;
