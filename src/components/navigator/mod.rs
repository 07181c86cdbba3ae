//! One-page-at-a-time slide navigation.
//!
//! Pages follow a fixed order. Moving forward slides the outgoing page away;
//! moving back fades it. Each page carries its own prev/next controls, and
//! only the current page's controls are ever shown.

mod component;
mod controls;
mod pages;
mod state;

pub use component::{NavigatorHandle, PageDeck};
pub use controls::{ControlOffset, control_offset};
pub use state::{ControlVisibility, Direction, Navigator, PageId, PagePhase, Transition};
