//! Session domain module.
//!
//! The session is the locally held record of the signed-in user, or its
//! absence. It is owned by [`SessionContext`], hydrated from and mirrored
//! into a [`SessionStore`] on top of a key-value [`DurableStore`].
//!
//! # Module Structure
//!
//! - `state`: `SessionState` (anonymous / authenticated)
//! - `store`: durable key-value storage trait and the persistent session store
//! - `context`: the session context with login, logout and partial update

mod context;
mod state;
mod store;

pub use context::SessionContext;
pub use state::SessionState;
pub use store::{
    DurableStore, MemoryDurableStore, PersistentSessionStore, SESSION_KEY, SessionStore,
};
