//! Studio Site - command-line entry point
//!
//! Default mode reads one contact form JSON document from stdin, validates and
//! routes it, sends the notification emails, and prints the outcome as JSON on
//! stdout.
//!
//! `studio-site blog [category] [search]` prints the blog listing for that
//! filter state instead.

use anyhow::Result;
use std::process::ExitCode;
use std::sync::Arc;
use studio_site_core::client::{AsyncEmailClient, AsyncEmailClientImpl};
use studio_site_core::notifications::NotificationContext;
use studio_site_core::{
    BlogService, BlogServiceImpl, Config, ContactService, ContactServiceImpl, EmailClient,
    FilterQuery, InquiryForm, Metrics,
};
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Load configuration
    let config = Config::from_env()?;

    // Logging goes to stderr so stdout carries only the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("blog") => run_blog(&config, &args[1..]).await,
        _ => run_contact(&config).await,
    }
}

async fn run_blog(config: &Config, args: &[String]) -> Result<ExitCode> {
    let service = BlogServiceImpl::from_config(config)?;

    let mut query = FilterQuery::default();
    if let Some(category) = args.first() {
        query.category = category.clone();
    }
    if let Some(search) = args.get(1) {
        query.search = search.clone();
    }

    let listing = service.listing(&query).await?;
    info!(
        "Showing {} of {} posts in '{}'",
        listing.posts.len(),
        listing.category_total,
        query.category
    );
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(ExitCode::SUCCESS)
}

async fn run_contact(config: &Config) -> Result<ExitCode> {
    info!("Using email provider at {}", config.email_api_url);

    let metrics = Metrics::new();
    let email_client = EmailClient::new(config).with_metrics(metrics.clone());
    let email_client =
        Arc::new(AsyncEmailClientImpl::new(email_client)) as Arc<dyn AsyncEmailClient>;

    let service = ContactServiceImpl::new(
        email_client,
        NotificationContext::from_config(config),
        metrics.clone(),
    );

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let form: InquiryForm = serde_json::from_str(&input)?;

    let code = match service.submit(form).await {
        Ok(outcome) => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            println!(
                "{}",
                serde_json::json!({ "success": false, "error": e.user_message() })
            );
            ExitCode::FAILURE
        }
    };

    info!("Metrics: {:?}", metrics.summary());
    Ok(code)
}
