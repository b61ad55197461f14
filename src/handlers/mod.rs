pub mod backend_health_handler;
pub mod imports;
pub mod matches;
pub mod players;
pub mod stats;
pub mod teams;
