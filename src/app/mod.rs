pub mod dashboard;
pub mod render;

pub use dashboard::{collect_news, run_dashboard_pass, DashboardRequest, DashboardView, NewsClients};
pub use render::{render_dashboard, render_tag_list};
