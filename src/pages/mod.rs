mod home;

pub use home::LandingPage;
