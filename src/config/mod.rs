//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::BlogFormat;
pub use site::CertificationsConfig;
pub use site::ContactConfig;
pub use site::SiteConfig;
pub use site::UiConfig;
