//! Domain models.
//!
//! Types shared by the data, service and bot layers: the persisted registry
//! records, the role allow-list, and the structured publish outcomes.

pub mod allow_list;
pub mod publish;
pub mod record;
