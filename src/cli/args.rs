//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cloudvault::client::search::{DateRange, SizeRange, SortKey, SortOrder};
use cloudvault::shared::models::ActivityKind;

/// cloudvault - command-line client for the CloudVault file store
#[derive(Parser, Debug)]
#[command(name = "cloudvault", version, about = "Command-line client for the CloudVault file store")]
pub struct Cli {
    /// API base URL (overrides CLOUDVAULT_API_URL and config.toml)
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Keep the token in memory only; nothing is written to disk
    #[arg(long = "no-persist", global = true)]
    pub no_persist: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the token
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Exchange the stored token for a fresh one
    Refresh,
    /// Upload, browse and manage files
    #[command(subcommand)]
    Files(FilesCommand),
    /// Storage usage, file types and recent uploads
    Dashboard,
    /// Profile and preferences
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Admin panel (admin role required)
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Public system endpoints
    #[command(subcommand)]
    System(SystemCommand),
}

/// Filters shared by `files list` and `files search`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Restrict to a file type category (repeatable)
    #[arg(long = "type", value_name = "TYPE")]
    pub file_types: Vec<String>,
    #[arg(long = "date", value_name = "RANGE")]
    pub date_range: Option<DateRange>,
    #[arg(long = "size", value_name = "RANGE")]
    pub size_range: Option<SizeRange>,
    #[arg(long = "sort", value_name = "KEY")]
    pub sort_by: Option<SortKey>,
    #[arg(long = "order", value_name = "ORDER")]
    pub sort_order: Option<SortOrder>,
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// List your files
    List {
        /// Keep only names containing this text (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show one file's metadata
    Get { id: String },
    /// Search your files
    Search {
        #[arg(default_value = "")]
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Filter values the server offers
    Filters,
    /// Upload one or more files, in order
    Upload {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Download a file
    Download {
        id: String,
        /// Destination path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Rename a file
    Rename { id: String, name: String },
    /// Delete a file
    Delete { id: String },
    /// Create a share link
    Share {
        id: String,
        /// Lifetime such as `7d`
        #[arg(long)]
        expires_in: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show your profile and storage
    Show,
    /// Change name and email
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change your password (all three read from stdin)
    Password,
    /// Show preferences
    Settings,
    /// Update preferences
    Set(SettingsArgs),
    /// Permanently delete your account
    Delete {
        /// Required; there is no undo
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    pub dark_mode: Option<bool>,
    #[arg(long)]
    pub email_notifications: Option<bool>,
    #[arg(long)]
    pub auto_backup: Option<bool>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub timezone: Option<String>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Stats, newest users and recent activity
    Overview,
    /// Aggregate counters
    Stats,
    /// List users
    Users {
        #[command(flatten)]
        paging: PageArgs,
        #[arg(long)]
        search: Option<String>,
    },
    /// System activity log
    Activity {
        #[command(flatten)]
        paging: PageArgs,
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<ActivityKind>,
    },
    /// Suspend a user
    Suspend { user_id: String },
    /// Re-activate a suspended user
    Activate { user_id: String },
    /// Delete a user
    DeleteUser {
        user_id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Server health
    Health,
    /// Show system settings
    Settings,
    /// Change system settings
    SetSetting(SystemSettingsArgs),
    /// Start a backup
    Backup,
    /// Server logs
    Logs {
        #[command(flatten)]
        paging: PageArgs,
        #[arg(long)]
        level: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SystemSettingsArgs {
    /// Bytes
    #[arg(long)]
    pub max_file_size: Option<u64>,
    /// Comma-separated MIME types
    #[arg(long, value_delimiter = ',')]
    pub allowed_file_types: Option<Vec<String>>,
    /// Bytes
    #[arg(long)]
    pub storage_quota_per_user: Option<u64>,
    #[arg(long)]
    pub enable_registration: Option<bool>,
    #[arg(long)]
    pub enable_file_sharing: Option<bool>,
    #[arg(long)]
    pub backup_frequency: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SystemCommand {
    /// Version and runtime info
    Info,
    /// Liveness check
    Health,
    /// Start a backup
    Backup,
    /// Recent log lines
    Logs {
        #[arg(long)]
        level: Option<String>,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
}
