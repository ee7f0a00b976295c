//! Core of the Ukraine arms-transfers dashboard: loads the processed SIPRI
//! trade register and importer rank tables, filters by delivery-year range,
//! and derives the four dashboard views (metrics, flow map, rankings, data
//! table) for a rendering shell.

pub mod error;
pub mod filter;
pub mod flow_map;
pub mod loader;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;
