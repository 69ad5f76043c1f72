//! Axum routes for serving the site under its base path.

use std::path::Path;

use axum::{http::StatusCode, response::Redirect, routing::get, Router};
use leptos::config::LeptosOptions;
use leptos::prelude::*;
use leptos_meta::MetaTags;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::{App, STYLESHEET};
use crate::config::BasePath;

pub const NOT_FOUND_BODY: &str = "404 - Page Not Found";

/// HTML document wrapping [`App`] for server rendering and hydration.
pub fn shell(options: LeptosOptions, base: BasePath) -> impl IntoView {
    let stylesheet = base.asset(STYLESHEET);
    let root = base.root().to_string();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options root/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The page at `base`, compiled assets under `{base}pkg`, redirects from `/`
/// and the unslashed base, and a plain 404 for everything else.
pub fn router(base: &BasePath, options: LeptosOptions, pkg_dir: &Path) -> Router {
    let page = leptos_axum::render_app_to_stream({
        let base = base.clone();
        move || shell(options.clone(), base.clone())
    });

    let mut app = Router::new()
        .route(base.as_str(), get(page))
        .nest_service(&base.asset("pkg"), ServeDir::new(pkg_dir));

    // Bare root and the unslashed base both point at the page
    if !base.is_root() {
        let redirect = Redirect::permanent(base.as_str());
        app = app
            .route("/", get({
                let redirect = redirect.clone();
                move || async move { redirect }
            }))
            .route(base.root(), get(move || async move { redirect }));
    }

    app.fallback(|| async { (StatusCode::NOT_FOUND, NOT_FOUND_BODY) })
        .layer(TraceLayer::new_for_http())
}
