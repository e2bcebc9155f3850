//! Unidirectional state primitives shared by the shop views.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ views
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Views only read state. The reducer is the single place a new state is
//! produced, and the owner of the state is the single writer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
