//! Party roles and their seeded assignment to seats.

pub mod assignment;

pub use assignment::{fascist_count, Party, Role, RoleAssignment, MAX_PLAYERS, MIN_PLAYERS};
