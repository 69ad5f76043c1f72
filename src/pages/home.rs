use leptos::prelude::*;

use crate::components::{
    current_year, About, Contact, CtaBanner, Footer, Hero, PortfolioGrid, ServicesGrid, SiteHeader,
};
use crate::models::{PROJECTS, SERVICES};

/// The whole site: header, the content sections in document order, footer.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white text-gray-900 antialiased">
            <SiteHeader/>

            <main class="max-w-7xl mx-auto px-6 py-12">
                <Hero/>
                <ServicesGrid services=SERVICES/>
                <PortfolioGrid projects=PROJECTS/>
                <About/>
                <Contact/>
                <CtaBanner/>
            </main>

            <Footer year=current_year()/>
        </div>
    }
}
