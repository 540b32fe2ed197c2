//! Role-gated navigation: the screen graph, the authorization decision and
//! the dispatcher state machine.

mod authorize;
mod navigator;
mod screen;

pub use authorize::{RouteDecision, authorize};
pub use navigator::Navigator;
pub use screen::Screen;
