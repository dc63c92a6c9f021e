pub mod automation;
pub mod inspector;

pub use automation::{ChromiumAutomation, ProfileAutomation};
pub use inspector::PageInspector;
