// src/entitlement/mod.rs — Session and free-usage entitlement
//
// `EntitlementManager` is the single source of truth for who is signed in,
// whether they are Pro, and how many free runs they have used. Consumers
// hold an `Arc<EntitlementManager>`; there is no global instance.

pub mod manager;
pub mod session;

pub use manager::EntitlementManager;
pub use session::{EntitlementStatus, Session};

/// Free-tier runs allowed before the paywall.
pub const DEFAULT_MAX_FREE_USAGE: u32 = 3;
