use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use eventscout_core::models::{AccessTier, Category, ProximityZone, TimeSlot};

/// Eventscout - Find events near you
#[derive(Parser, Debug)]
#[command(name = "eventscout")]
#[command(about = "Find events near you", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the suggestion and event-search services
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Ambient geolocation endpoint URL
    #[arg(long, global = true)]
    pub locator_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive session
    Interactive,

    /// Run a one-shot event search
    Search(SearchArgs),

    /// Look up city-name suggestions for a partial query
    Suggest(SuggestArgs),

    /// Resolve this host's location
    Locate,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// City to search in (free text)
    #[arg(long)]
    pub city: Option<String>,

    /// Resolve the host's location first and include it in the search
    #[arg(long)]
    pub locate: bool,

    /// Time-of-day filter
    #[arg(long, value_enum, default_value = "all")]
    pub time: TimeSlotArg,

    /// Date filter (YYYY-MM-DD); only sent alongside a non-default --time
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Proximity zone filter
    #[arg(long, value_enum)]
    pub zone: Option<ZoneArg>,

    /// Preferred category filter
    #[arg(long, value_enum, default_value = "all")]
    pub category: CategoryArg,

    /// Simulated access tier sent with the request
    #[arg(long, value_enum, default_value = "standard")]
    pub role: RoleArg,
}

#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// The partial city name
    pub query: String,
}

/// Time slot selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeSlotArg {
    All,
    Morning,
    Afternoon,
    Evening,
}

impl From<TimeSlotArg> for TimeSlot {
    fn from(arg: TimeSlotArg) -> Self {
        match arg {
            TimeSlotArg::All => TimeSlot::All,
            TimeSlotArg::Morning => TimeSlot::Morning,
            TimeSlotArg::Afternoon => TimeSlot::Afternoon,
            TimeSlotArg::Evening => TimeSlot::Evening,
        }
    }
}

/// Proximity zone selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ZoneArg {
    ZoneA,
    ZoneB,
}

impl From<ZoneArg> for ProximityZone {
    fn from(arg: ZoneArg) -> Self {
        match arg {
            ZoneArg::ZoneA => ProximityZone::ZoneA,
            ZoneArg::ZoneB => ProximityZone::ZoneB,
        }
    }
}

/// Category selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryArg {
    All,
    Music,
    Arts,
    Sports,
    Business,
    FoodAndDrink,
    Tech,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => Category::All,
            CategoryArg::Music => Category::Music,
            CategoryArg::Arts => Category::Arts,
            CategoryArg::Sports => Category::Sports,
            CategoryArg::Business => Category::Business,
            CategoryArg::FoodAndDrink => Category::FoodAndDrink,
            CategoryArg::Tech => Category::Tech,
            CategoryArg::Other => Category::Other,
        }
    }
}

/// Simulated access tier selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RoleArg {
    Standard,
    Premium,
}

impl From<RoleArg> for AccessTier {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Standard => AccessTier::Standard,
            RoleArg::Premium => AccessTier::Premium,
        }
    }
}
