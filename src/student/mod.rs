pub mod filter;
pub mod model;
pub mod page;
pub mod service;

pub use filter::StudentFilter;
pub use model::NewStudent;
pub use page::{Page, PageRequest, PageSettings, SortColumn, SortDirection, SortOrder};
pub use service::StudentService;
