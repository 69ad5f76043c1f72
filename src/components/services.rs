use leptos::prelude::*;

use crate::models::ServiceOffering;
use crate::motion::{motion_attr, Transition};

/// One card per service, in the order given. An empty slice renders an empty grid.
#[component]
pub fn ServicesGrid(services: &'static [ServiceOffering]) -> impl IntoView {
    view! {
        <section id="services" class="mt-16">
            <h2 class="text-2xl font-bold">"What we do"</h2>
            <p class="mt-2 text-gray-600 max-w-2xl">
                "Software development focused on web apps and custom solutions, plus data "
                "analysis and visualization to power decisions."
            </p>

            <div class="mt-8 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {services
                    .iter()
                    .map(|service| view! { <ServiceCard service=*service/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: ServiceOffering) -> impl IntoView {
    let motion = motion_attr(Transition::SERVICE_LIFT);

    view! {
        <div
            class="service-card bg-white rounded-xl p-6 border border-gray-100 shadow-sm"
            data-motion=motion
        >
            <div class="text-indigo-600 font-semibold">{service.title}</div>
            <div class="mt-2 text-gray-700 text-sm">{service.description}</div>
            <ul class="mt-3 text-sm text-gray-600 space-y-1">
                {service
                    .bullets
                    .iter()
                    .map(|bullet| view! { <li>"• " {*bullet}</li> })
                    .collect_view()}
            </ul>
            <div class="mt-4">
                <a href="#contact" class="inline-block text-sm font-medium text-indigo-600">
                    "Start a project →"
                </a>
            </div>
        </div>
    }
}
