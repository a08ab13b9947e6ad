use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_catalog, load_settings, release_count_line, HttpClient, PressReleaseClient, ReleaseView,
    Settings,
};
use shared::{
    domain::{Catalog, CompanyRecord, Ticker},
    protocol::PressRelease,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "press-desk", about = "Company catalog and press release lookups")]
struct Args {
    /// Base URL of the press release API
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    /// Catalog CSV path or http(s) URL
    #[arg(long, global = true)]
    catalog: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every company in the catalog as "<name> (<ticker>)"
    Companies,
    /// Fetch and print press releases for one ticker
    Releases {
        #[arg(long)]
        ticker: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = load_settings().with_overrides(args.api_base_url, args.catalog);

    let http = HttpClient::new();

    match args.command {
        Command::Companies => list_companies(&http, &settings).await,
        Command::Releases { ticker } => {
            print_releases(&http, &settings, Ticker::new(ticker.trim())).await
        }
    }
}

async fn list_companies(http: &HttpClient, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(http, &settings.catalog())
        .await
        .context("Failed to load companies list")?;
    for record in catalog.iter() {
        println!("{}", record.label());
    }
    Ok(())
}

async fn print_releases(http: &HttpClient, settings: &Settings, ticker: Ticker) -> Result<()> {
    // The catalog only supplies the display name; a missing catalog is not fatal here.
    let catalog = match load_catalog(http, &settings.catalog()).await {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            tracing::warn!("catalog unavailable, using ticker as company name: {err}");
            None
        }
    };
    let company = resolve_company(catalog.as_ref(), &ticker);

    let client = PressReleaseClient::with_http_client(http.clone(), &settings.api_base_url);
    let releases = client
        .fetch_press_releases(&ticker)
        .await
        .with_context(|| format!("Failed to load press releases for {}", company.name))?;

    print!("{}", render_releases(&company, &releases));
    Ok(())
}

fn resolve_company(catalog: Option<&Catalog>, ticker: &Ticker) -> CompanyRecord {
    catalog
        .and_then(|catalog| catalog.find(ticker).cloned())
        .unwrap_or_else(|| CompanyRecord {
            name: ticker.to_string(),
            ticker: ticker.clone(),
        })
}

fn render_releases(company: &CompanyRecord, releases: &[PressRelease]) -> String {
    let mut out = String::new();
    if releases.is_empty() {
        out.push_str("No Press Releases Found\n");
        out.push_str(&format!(
            "No recent press releases were found for {}.\n",
            company.label()
        ));
        return out;
    }

    out.push_str(&format!("{}\n", company.label()));
    out.push_str(&format!("{}\n", release_count_line(releases.len())));
    for release in releases {
        let view = ReleaseView::from_release(release);
        out.push_str(&format!("\n{}\n{}\n{}\n", view.title, view.date, view.summary));
        if let Some(link) = view.link {
            out.push_str(&format!("Read Full Release: {link}\n"));
        }
    }
    out
}
