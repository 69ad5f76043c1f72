#[cfg(feature = "ssr")]
use std::path::PathBuf;

#[cfg(feature = "ssr")]
#[derive(clap::Parser)]
#[command(name = "narenp", about = "Serve or export the NarenP site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[cfg(feature = "ssr")]
#[derive(clap::Subcommand)]
enum Command {
    /// Serve the site under its base path (default)
    Serve,
    /// Write the site as static files
    Export {
        /// Output directory, defaults to EXPORT_DIR
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use narenp::config::SiteConfig;

    // Load env vars
    dotenvy::dotenv().ok();
    narenp::logging::init();

    let cli = Cli::parse();
    let site = match SiteConfig::from_env() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return Err(e.into());
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(site).await,
        Command::Export { out } => export(site, out),
    }
}

#[cfg(feature = "ssr")]
async fn serve(site: narenp::config::SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::get_configuration;

    // Leptos config
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let base = site.base_path;
    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);

    let app = narenp::server::router(&base, leptos_options, &pkg_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}{base}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(feature = "ssr")]
fn export(
    site: narenp::config::SiteConfig,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::get_configuration;

    let site_root = match get_configuration(None) {
        Ok(conf) => PathBuf::from(&*conf.leptos_options.site_root),
        Err(e) => {
            tracing::debug!("no leptos configuration ({e}), using SITE_ROOT");
            site.site_root.clone()
        }
    };
    let out_dir = out.unwrap_or(site.export_dir);

    match narenp::export::export_site(&site.base_path, &site_root, &out_dir) {
        Ok(report) => {
            tracing::info!(
                index = %report.index.display(),
                stylesheet = report.stylesheet.is_some(),
                "export finished"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("export failed: {e}");
            Err(e.into())
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
