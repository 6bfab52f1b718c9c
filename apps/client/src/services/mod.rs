//! Service layer: polling synchronization, intent submission, and the
//! session context that keeps them consistent.

pub mod gateway;
pub mod session;
pub mod table_sync;

pub use gateway::{ActionGateway, ActionKind, MutationState};
pub use session::{SessionMode, TableSession};
pub use table_sync::{SyncStop, TableFeed, TableSync};
