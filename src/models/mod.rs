mod catalog;
mod content;

pub use catalog::{PROJECTS, SERVICES};
pub use content::{PortfolioProject, ServiceOffering, TAG_SEPARATOR};
