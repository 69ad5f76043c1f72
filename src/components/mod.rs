mod about;
mod contact;
mod cta;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod services;

pub use about::About;
pub use contact::Contact;
pub use cta::CtaBanner;
pub use footer::{current_year, Footer};
pub use hero::Hero;
pub use nav::SiteHeader;
pub use portfolio::PortfolioGrid;
pub use services::ServicesGrid;
