mod format;
mod host;
mod scroll;
mod store;
mod tab;
mod tips;
mod view;

pub use format::{header_class, level_label, skill_width_style, tab_button_class, Metric};
pub use host::{Host, HostError, VirtualHandle, VirtualHost};
pub use scroll::{is_scrolled, SCROLL_THRESHOLD};
pub use store::{LocalStore, Snapshot, Store};
pub use tab::Tab;
pub use tips::{TipPicker, TipState, SECURITY_TIPS};
pub use view::{PortfolioView, Timings};
