//! Route handlers, one module per route family.
pub mod agents;
pub mod contact;
pub mod health;
pub mod quotes;

pub use agents::{list_agents, region_average};
pub use contact::submit_contact;
pub use health::{health, status, trigger_error};
pub use quotes::calc_residential;
