//! Static cloud service type metadata for the Prowler compliance plugin.
//!
//! The host platform renders scan results through a declarative display
//! schema: search filters, a main results table, summary widgets, and two
//! drill-down sub-tables unwinding the nested `checks` and `findings`
//! arrays. Everything here is passive configuration built once at
//! registration time; there is no runtime logic.

mod schema;

pub use schema::{CloudServiceType, cloud_service_type};
