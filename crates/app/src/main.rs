//! Gala - guest list and room mapping for events
//!
//! Fetches an event's guests from the directory service, groups them by
//! family, and maps guest-units onto purchased hotel rooms.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gala_core::{demo_guests, Guest, RoomMapping, RoomSelection, RoomType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;
mod directory;
mod error;
mod state;
mod viewmodel;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::viewmodel::{GuestListViewModel, RoomMappingViewModel};

#[derive(Parser)]
#[command(name = "gala")]
#[command(about = "Guest list and room mapping for events", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Event to work on
    #[arg(long, global = true)]
    event: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the guest list, one row per family
    Guests {
        /// Expand every family
        #[arg(long)]
        all: bool,

        /// Expand one family by its key; repeatable
        #[arg(long, value_name = "FAMILY_KEY")]
        expand: Vec<String>,
    },
    /// List the room types that can be purchased
    Catalog,
    /// Save purchased rooms as TYPE=QTY pairs; no pairs shows the current selection
    Select {
        picks: Vec<String>,

        /// Forget the saved selection
        #[arg(long, conflicts_with = "picks")]
        clear: bool,
    },
    /// Print the room mapping
    Rooms {
        /// Run auto-assign before printing
        #[arg(long)]
        auto: bool,

        /// Use directory families as guest-units instead of the demo list
        #[arg(long)]
        from_directory: bool,
    },
    /// Edit the room mapping interactively
    Map {
        /// Use directory families as guest-units instead of the demo list
        #[arg(long)]
        from_directory: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_env();

    match cli.command {
        Command::Catalog => print_catalog(),
        Command::Guests { all, expand } => {
            let (app, event_id) = open_event(config, cli.event)?;
            let mut view = GuestListViewModel::new();
            let client = directory::client(&app.config)?;
            view.apply_fetch(directory::fetch_records(&client, &event_id).await);
            expand_families(&mut view, all, &expand);
            print!("{}", console::render_guest_list(&view.rows()));
            if !view.is_empty() {
                print!("{}", console::render_guest_summary(&view));
            }
        }
        Command::Select { picks, clear } => {
            let (app, event_id) = open_event(config, cli.event)?;
            if clear {
                app.clear_selection(&event_id)?;
                println!("Selection cleared for {}", event_id);
            } else if picks.is_empty() {
                print_selection(&app, &event_id)?;
            } else {
                let selection = parse_selection(&picks)?;
                app.save_selection(&event_id, &selection)?;
                print_selection(&app, &event_id)?;
            }
        }
        Command::Rooms {
            auto,
            from_directory,
        } => {
            let (app, event_id) = open_event(config, cli.event)?;
            let mut view = mapping_view(&app, &event_id, from_directory).await?;
            if auto {
                let summary = view.auto_assign();
                println!(
                    "Placed {} guests, {} left unassigned.",
                    summary.placed, summary.remaining
                );
            }
            print!("{}", console::render_mapping(&view));
        }
        Command::Map { from_directory } => {
            let (app, event_id) = open_event(config, cli.event)?;
            let mut view = mapping_view(&app, &event_id, from_directory).await?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            console::run_session(&mut view, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Open the local database and settle on the event to work on
fn open_event(config: Config, from_cli: Option<String>) -> Result<(AppState, String)> {
    let app = AppState::open(config)?;
    let event_id = app.resolve_event(from_cli)?;
    tracing::info!(event_id = %event_id, "Starting Gala");
    Ok((app, event_id))
}

/// Apply `--all` and `--expand` to a loaded guest list
fn expand_families(view: &mut GuestListViewModel, all: bool, keys: &[String]) {
    if all {
        view.expand_all();
    }
    for key in keys {
        if view.is_expanded(key) {
            continue;
        }
        if !view.toggle(key) {
            tracing::warn!(family = %key, "No family with that key to expand");
        }
    }
}

/// Build the mapping view from the saved selection and the chosen guests
async fn mapping_view(
    app: &AppState,
    event_id: &str,
    from_directory: bool,
) -> Result<RoomMappingViewModel> {
    let rooms = app.rooms_for(event_id)?;
    let guests = if from_directory {
        directory_guests(app, event_id).await?
    } else {
        demo_guests()
    };
    Ok(RoomMappingViewModel::new(RoomMapping::new(rooms, guests)))
}

/// Families from the directory as guest-units; demo guests if the fetch fails
async fn directory_guests(app: &AppState, event_id: &str) -> Result<Vec<Guest>> {
    let client = directory::client(&app.config)?;
    let mut view = GuestListViewModel::new();
    view.apply_fetch(directory::fetch_records(&client, event_id).await);

    if view.is_empty() {
        tracing::warn!(event_id, "No directory guests, using demo list");
        return Ok(demo_guests());
    }
    Ok(view.groups().iter().map(|g| g.to_guest()).collect())
}

fn parse_selection(picks: &[String]) -> Result<RoomSelection> {
    let mut selection = RoomSelection::new();
    for pick in picks {
        let (type_id, qty) = pick
            .split_once('=')
            .ok_or_else(|| AppError::InvalidArgument(format!("expected TYPE=QTY, got '{}'", pick)))?;
        let qty: u32 = qty
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidArgument(format!("bad quantity in '{}'", pick)))?;
        selection.set(type_id.trim(), qty);
    }
    Ok(selection)
}

fn print_catalog() {
    for room_type in RoomType::catalog() {
        println!(
            "{:<15} {} - {} (sleeps {})",
            room_type.id, room_type.hotel_name, room_type.name, room_type.capacity
        );
    }
}

fn print_selection(app: &AppState, event_id: &str) -> Result<()> {
    match app.selection(event_id)? {
        Some(selection) if !selection.is_empty() => {
            println!("Rooms purchased for {}:", event_id);
            for (type_id, qty) in selection.iter() {
                println!("  {:<15} x{}", type_id, qty);
            }
        }
        _ => println!("No rooms purchased for {}; the fallback set will be used.", event_id),
    }
    Ok(())
}
