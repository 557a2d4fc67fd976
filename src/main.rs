//! CLI for exercising the cached customer service.
//!
//! # Usage
//!
//! ```bash
//! # Read the customer list twice: first call misses, second hits
//! cargo run -- list
//!
//! # Read five times through Redis
//! CACHE_BACKEND=redis REDIS_URL=redis://localhost:6379 cargo run -- list --repeat 5
//!
//! # Populate, invalidate, and read again
//! cargo run -- invalidate
//!
//! # Show the active cache backend
//! cargo run -- health
//! ```
//!
//! # Environment Variables
//!
//! See [`customer_cache::config`] for the full list.

use customer_cache::application::services::CustomerService;
use customer_cache::bootstrap::build_customer_service;
use customer_cache::config;
use customer_cache::domain::entities::Customer;
use customer_cache::infrastructure::persistence::InMemoryCustomerRepository;
use customer_cache::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for the customer cache service.
#[derive(Parser)]
#[command(name = "customer-cache")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read all customers, repeatedly, reporting data source fetches
    List {
        /// Number of reads to perform
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },

    /// Read, invalidate the cached list, and read again
    Invalidate,

    /// Show cache backend and health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config.log_level, &config.log_format);
    config.print_summary();

    let (service, repository) = build_customer_service(&config).await?;

    match cli.command {
        Commands::List { repeat } => handle_list(&service, &repository, repeat).await?,
        Commands::Invalidate => handle_invalidate(&service, &repository).await?,
        Commands::Health => handle_health(&service).await,
    }

    Ok(())
}

/// Reads the customer list `repeat` times.
async fn handle_list(
    service: &CustomerService<InMemoryCustomerRepository>,
    repository: &InMemoryCustomerRepository,
    repeat: u32,
) -> Result<()> {
    println!(
        "{} (cache: {})",
        "Customers".bright_blue().bold(),
        service.cache_backend().cyan()
    );
    println!();

    for call in 1..=repeat {
        let before = repository.fetch_count();
        let customers = service.get_all_customers().await?;
        print_read(call, &customers, repository.fetch_count() > before);
    }

    println!();
    println!(
        "Data source fetches: {}",
        repository.fetch_count().to_string().yellow()
    );

    Ok(())
}

/// Demonstrates that an explicit removal forces a fresh fetch.
async fn handle_invalidate(
    service: &CustomerService<InMemoryCustomerRepository>,
    repository: &InMemoryCustomerRepository,
) -> Result<()> {
    let before = repository.fetch_count();
    let customers = service.get_all_customers().await?;
    print_read(1, &customers, repository.fetch_count() > before);

    service.invalidate_all_customers().await?;
    println!("{}", "Cached customer list removed".yellow());

    let before = repository.fetch_count();
    let customers = service.get_all_customers().await?;
    print_read(2, &customers, repository.fetch_count() > before);

    println!();
    println!(
        "Data source fetches: {}",
        repository.fetch_count().to_string().yellow()
    );

    Ok(())
}

async fn handle_health(service: &CustomerService<InMemoryCustomerRepository>) {
    let status = if service.cache_healthy().await {
        "healthy".green()
    } else {
        "unreachable".red()
    };

    println!("Cache backend: {}", service.cache_backend().cyan());
    println!("Status:        {}", status);
}

fn print_read(call: u32, customers: &[Customer], fetched: bool) {
    let source = if fetched {
        "data source".yellow()
    } else {
        "cache".green()
    };

    println!(
        "#{} {} customer(s) from {}",
        call,
        customers.len().to_string().bold(),
        source
    );

    for customer in customers {
        match customer.email {
            Some(ref email) => println!("   {} {} <{}>", customer.id, customer.name, email.dimmed()),
            None => println!("   {} {}", customer.id, customer.name),
        }
    }
}
