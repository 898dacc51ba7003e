//! Browser drivers

pub mod chrome;
pub mod snapshot;


pub use chrome::ChromeBrowser;
pub use snapshot::{SnapshotBrowser, SnapshotElement};
