use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::{Rc, Weak};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::listing::{ProvenanceEventListing, results_message_with_limit};
use crate::models::{NavigationParams, Provenance, QueryRequest, QueryResults};
use crate::observable::State;
use crate::store::{DialogHost, ListingStore, QueryExecutor};
use crate::utils::{ListingConfig, init_logging};

#[derive(Parser)]
#[command(name = "provenance-listing")]
#[command(version = "0.1.0")]
#[command(
    about = "Reconcile provenance query requests and report listing status",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Activate a listing against an in-memory store and print every resubmitted query
    Simulate {
        /// Component id taken from the route
        #[arg(long)]
        component_id: Option<String>,
        /// Flow file uuid taken from the route
        #[arg(long)]
        flow_file_uuid: Option<String>,
        /// Total count reported by the stub executor for every query
        #[arg(long, default_value_t = 0)]
        total_count: u64,
        /// Clear the persisted request after the initial query
        #[arg(long)]
        clear: bool,
        /// Refresh the listing as the last step
        #[arg(long)]
        refresh: bool,
    },
    /// Print the results message for a request read from a JSON file
    Message {
        /// Path to a JSON encoded query request
        #[arg(long)]
        request: PathBuf,
        #[arg(long, default_value_t = 0)]
        total_count: u64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ListingConfig::from_env()?;
    init_logging(&config.log_filter);

    match cli.command {
        Some(Commands::Simulate { component_id, flow_file_uuid, total_count, clear, refresh }) => {
            let params = NavigationParams::new(component_id, flow_file_uuid);
            simulate(&config, params, total_count, clear, refresh)?;
        }
        Some(Commands::Message { request, total_count }) => {
            show_message(&config, &request, total_count)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Executor that answers every query with a fixed total count
struct StubExecutor {
    total_count: u64,
    store: RefCell<Weak<ListingStore>>,
}

impl QueryExecutor for StubExecutor {
    fn resubmit(&self, request: &QueryRequest) {
        match serde_json::to_string(request) {
            Ok(json) => println!("resubmit: {}", json),
            Err(e) => warn!(error = %e, "failed to encode request"),
        }

        if let Some(store) = self.store.borrow().upgrade() {
            store.record_results(Provenance {
                request: request.clone(),
                results: QueryResults {
                    total_count: self.total_count,
                    provenance_events: Vec::new(),
                },
            });
        }
    }
}

struct LoggingDialogs;

impl DialogHost for LoggingDialogs {
    fn open_search_dialog(&self) {
        info!("open search dialog");
    }

    fn open_event_dialog(&self, id: &str) {
        info!(id, "open event dialog");
    }
}

fn simulate(
    config: &ListingConfig,
    params: NavigationParams,
    total_count: u64,
    clear: bool,
    refresh: bool,
) -> Result<()> {
    let executor = Rc::new(StubExecutor { total_count, store: RefCell::new(Weak::new()) });
    let store = Rc::new(ListingStore::new(executor.clone(), Rc::new(LoggingDialogs)));
    *executor.store.borrow_mut() = Rc::downgrade(&store);

    let navigation = State::new(Some(params));
    let listing = ProvenanceEventListing::activate(Rc::clone(&store), &navigation);

    if clear {
        listing.clear_request();
    }
    if refresh {
        listing.refresh();
    }

    let provenance = store.provenance().context("No query was executed")?;
    println!(
        "{}",
        results_message_with_limit(&provenance.request, &provenance.results, config.max_results)
    );

    listing.teardown();
    Ok(())
}

fn show_message(config: &ListingConfig, path: &Path, total_count: u64) -> Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))?;
    let request: QueryRequest = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse request file: {}", path.display()))?;

    let results = QueryResults { total_count, provenance_events: Vec::new() };
    println!("{}", results_message_with_limit(&request, &results, config.max_results));
    Ok(())
}
