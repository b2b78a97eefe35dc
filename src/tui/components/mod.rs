pub mod breadcrumb;
pub mod status_bar;
pub mod scrollable;

pub use breadcrumb::render_breadcrumb;
pub use status_bar::render_status_bar;
pub use scrollable::Scrollable;
