pub mod dashboard_viewmodel;
pub mod session_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use session_viewmodel::SessionViewModel;
