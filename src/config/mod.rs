//! Configuration module

mod site;

pub use site::ProfileOverride;
pub use site::SiteConfig;
