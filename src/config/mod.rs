//! Configuration module

mod information;
mod site;

pub use information::{Experience, Information};
pub use site::HighlightConfig;
pub use site::SiteConfig;
