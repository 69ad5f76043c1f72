use leptos::prelude::*;
use leptos_meta::*;

use crate::motion::{motion_stylesheet, MotionLayer};
use crate::pages::LandingPage;

pub const SITE_TITLE: &str = "NarenP - Software Development & Data Science";
pub const SITE_DESCRIPTION: &str =
    "NarenP builds modern web applications, automation tools and data solutions.";
/// Compiled stylesheet, relative to the site's base path
pub const STYLESHEET: &str = "pkg/narenp.css";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(MotionLayer::Animated);

    view! {
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Style id="motion">{motion_stylesheet()}</Style>

        <LandingPage/>
    }
}
