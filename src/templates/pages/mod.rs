pub mod categories;
pub mod conversations;
pub mod dashboard;
pub mod flow;
pub mod regions;
pub mod search;
pub mod settings;

pub use categories::categories_page;
pub use conversations::{add_conversation_page, conversation_detail_page, field_label};
pub use dashboard::{dashboard_page, DashboardVm};
pub use flow::status_flow_page;
pub use regions::{region_detail_page, regions_page};
pub use search::search_results_page;
pub use settings::settings_page;
