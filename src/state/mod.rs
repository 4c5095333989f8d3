// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod dashboard_state;
pub mod forms;
pub mod route;
pub mod session_state;

pub use app_state::*;
pub use auth_state::*;
pub use dashboard_state::*;
pub use forms::*;
pub use route::*;
pub use session_state::*;
