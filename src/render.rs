//! Static HTML rendering.
//!
//! Everything here runs the component tree once through Leptos'
//! [`RenderHtml`] and returns a string. No reactive runtime is left behind
//! and no hydration markers are needed, so the output can be written
//! straight to disk or compared in tests.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::app::{SITE_DESCRIPTION, SITE_TITLE, STYLESHEET};
use crate::config::BasePath;
use crate::motion::{motion_stylesheet, MotionLayer};
use crate::pages::LandingPage;

/// Render `view_fn` to HTML with `layer` installed as the motion layer.
pub fn render_with<F, V>(layer: MotionLayer, view_fn: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(layer);
        view_fn().to_html()
    })
}

/// The page body alone.
pub fn render_page(layer: MotionLayer) -> String {
    render_with(layer, || view! { <LandingPage/> })
}

/// A complete, self-contained HTML document for static hosting under `base`.
pub fn render_document(base: &BasePath, layer: MotionLayer) -> String {
    let stylesheet = base.asset(STYLESHEET);
    let html = render_with(layer, move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{SITE_TITLE}</title>
                    <meta name="description" content=SITE_DESCRIPTION/>
                    <link rel="stylesheet" href=stylesheet/>
                    <style>{motion_stylesheet()}</style>
                </head>
                <body>
                    <LandingPage/>
                </body>
            </html>
        }
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Footer, PortfolioGrid, ServicesGrid, SiteHeader};
    use crate::models::{PortfolioProject, ServiceOffering, PROJECTS, SERVICES};
    use pretty_assertions::assert_eq;

    static TWO_SERVICES: &[ServiceOffering] = &[
        ServiceOffering {
            id: 7,
            title: "Zeta Service",
            description: "Last alphabetically, first on the page.",
            bullets: &["third bullet", "first bullet", "second bullet"],
        },
        ServiceOffering {
            id: 3,
            title: "Alpha Service",
            description: "First alphabetically, second on the page.",
            bullets: &["only bullet"],
        },
    ];

    static NO_SERVICES: &[ServiceOffering] = &[];
    static NO_PROJECTS: &[PortfolioProject] = &[];

    static ONE_PROJECT: &[PortfolioProject] = &[PortfolioProject {
        id: 1,
        title: "Solo Project",
        subtitle: "Shipped alone",
        tags: &["Rust", "Leptos", "Axum"],
        excerpt: "A single card.",
    }];

    /// Drop every `data-motion="..."` attribute from rendered HTML.
    fn strip_motion(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(start) = rest.find(" data-motion=\"") {
            out.push_str(&rest[..start]);
            let after = &rest[start + " data-motion=\"".len()..];
            let end = after.find('"').expect("unterminated data-motion attribute");
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| {
                html.find(needle)
                    .unwrap_or_else(|| panic!("{needle:?} missing from output"))
            })
            .collect()
    }

    fn assert_ascending(positions: &[usize]) {
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "out of order: {positions:?}"
        );
    }

    #[test]
    fn services_grid_renders_one_card_per_entry_in_order() {
        let html = render_with(MotionLayer::Static, || {
            view! { <ServicesGrid services=TWO_SERVICES/> }
        });

        assert_eq!(html.matches("service-card").count(), 2);
        assert_ascending(&positions(
            &html,
            &[
                "Zeta Service",
                "Last alphabetically",
                "third bullet",
                "first bullet",
                "second bullet",
                "Alpha Service",
                "First alphabetically",
                "only bullet",
            ],
        ));
        assert_eq!(html.matches("Start a project →").count(), 2);
    }

    #[test]
    fn empty_grids_render_without_cards() {
        let services = render_with(MotionLayer::Animated, || {
            view! { <ServicesGrid services=NO_SERVICES/> }
        });
        assert!(services.contains("id=\"services\""));
        assert_eq!(services.matches("service-card").count(), 0);

        let projects = render_with(MotionLayer::Animated, || {
            view! { <PortfolioGrid projects=NO_PROJECTS/> }
        });
        assert!(projects.contains("id=\"projects\""));
        assert_eq!(projects.matches("project-card").count(), 0);
    }

    #[test]
    fn portfolio_grid_renders_tag_line() {
        let html = render_with(MotionLayer::Static, || {
            view! { <PortfolioGrid projects=ONE_PROJECT/> }
        });

        assert_eq!(html.matches("project-card").count(), 1);
        assert!(html.contains("Rust • Leptos • Axum"));
        assert_ascending(&positions(
            &html,
            &["Rust • Leptos • Axum", "Solo Project", "A single card.", "Shipped alone"],
        ));
    }

    #[test]
    fn shipped_page_has_expected_cards() {
        let html = render_page(MotionLayer::Animated);

        assert_eq!(html.matches("service-card").count(), SERVICES.len());
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        assert_ascending(&positions(
            &html,
            &[
                "Web Applications &amp; Websites",
                "Custom Software Solutions",
                "Automation Tools",
                "Data Analysis &amp; Visualization",
            ],
        ));
        assert_ascending(&positions(
            &html,
            &[
                "Real Estate Sales Dashboard",
                "CRM Automation Suite",
                "Marketing Analytics Portal",
            ],
        ));

        let tag_lines: Vec<&str> = html
            .split("tag-line")
            .skip(1)
            .filter_map(|chunk| {
                let start = chunk.find('>')? + 1;
                let end = chunk[start..].find('<')? + start;
                Some(&chunk[start..end])
            })
            .collect();
        assert_eq!(
            tag_lines,
            vec!["Power BI • Automation", "Python • CRM", "Looker • SQL"]
        );
    }

    #[test]
    fn sections_render_in_document_order() {
        let html = render_page(MotionLayer::Static);
        assert_ascending(&positions(
            &html,
            &[
                "<header",
                "Turning Data into Decisions",
                "id=\"services\"",
                "id=\"projects\"",
                "id=\"about\"",
                "id=\"contact\"",
                "cta-banner",
                "<footer",
            ],
        ));
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(
            render_page(MotionLayer::Animated),
            render_page(MotionLayer::Animated)
        );
    }

    #[test]
    fn static_layer_only_drops_motion_attributes() {
        let animated = render_page(MotionLayer::Animated);
        let still = render_page(MotionLayer::Static);

        assert!(animated.contains("data-motion=\"hero-heading\""));
        assert!(animated.contains("data-motion=\"hero-card\""));
        assert_eq!(animated.matches("data-motion=\"service-lift\"").count(), 4);
        assert_eq!(animated.matches("data-motion=\"project-scale\"").count(), 3);
        assert!(!still.contains("data-motion"));

        assert_eq!(strip_motion(&animated), still);
    }

    #[test]
    fn page_without_motion_context_renders_statically() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <LandingPage/> }.to_html());
        assert!(!html.contains("data-motion"));
        assert_eq!(html, render_page(MotionLayer::Static));
    }

    #[test]
    fn footer_shows_current_year() {
        let html = render_page(MotionLayer::Static);
        let year = crate::components::current_year().expect("clock has a year");
        assert!(html.contains(&format!("© {year} NarenP")));
    }

    #[test]
    fn footer_omits_missing_year() {
        let html = render_with(MotionLayer::Static, || view! { <Footer year=None/> });
        assert!(html.contains("© NarenP — Software Development &amp; Data Science"));
    }

    #[test]
    fn consultation_link_points_at_page_top() {
        let html = render_with(MotionLayer::Static, || {
            view! { <SiteHeader/> }
        });
        let link = html
            .find("Get a Consultation")
            .and_then(|end| html[..end].rfind("<a "))
            .map(|start| &html[start..])
            .expect("consultation link rendered");
        assert!(link.starts_with("<a href=\"#\""), "{link}");
    }

    #[test]
    fn contact_form_is_inert() {
        let html = render_page(MotionLayer::Static);
        assert!(html.contains("placeholder=\"Your name\""));
        assert!(html.contains("placeholder=\"you@company.com\""));
        assert!(html.contains("<textarea"));
        assert_eq!(html.matches("type=\"button\"").count(), 3);
        assert!(!html.contains("action="));
        assert!(!html.contains("type=\"submit\""));
    }

    #[test]
    fn document_links_assets_under_base_path() {
        let base = BasePath::parse("/NarenP-website/").unwrap();
        let html = render_document(&base, MotionLayer::Animated);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("href=\"/NarenP-website/pkg/narenp.css\""));
        assert!(html.contains("@keyframes motion-enter"));
        for anchor in ["#services", "#projects", "#about", "#contact"] {
            assert!(html.contains(&format!("href=\"{anchor}\"")), "{anchor}");
        }
        assert!(!html.contains("href=\"/pkg/"));
    }
}
