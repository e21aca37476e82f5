pub mod path;
pub mod router;
pub mod stack;
pub mod state;
pub mod table;

pub use router::{Observer, Router, SubscriptionId};
pub use stack::{NavigationFrame, NavigationStack};
pub use state::{NavigationState, Transition};
pub use table::{Resolution, RouteEntry, RouteTable, RouteTarget, ViewId};
