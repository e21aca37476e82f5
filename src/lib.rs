pub mod app;
pub mod config;
pub mod input;
pub mod navigation;
pub mod view;

pub mod error;

pub use error::RouterError;
pub use navigation::{RouteEntry, RouteTable, RouteTarget, Router, Transition, ViewId};
