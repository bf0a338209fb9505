//! wp-populate library
//!
//! Seeds a WordPress site with synthetic categories, tags, authors, posts,
//! pages, comments and featured images for development and testing.
//!
//! # Crates
//!
//! - `populate_generator` - synthetic field values and random selection
//! - `content_store` - store traits, entity types and the in-memory store
//! - `wp_rest_client` - WordPress REST API store and media sideloader
//! - `populate_seeder` - creation operations and dependency backfill
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten categories
//! wp-populate --endpoint http://localhost:8080 --username admin \
//!   --application-password "abcd efgh ijkl mnop" category --count 10
//!
//! # Posts with tags, a category and comments
//! wp-populate post --count 3 --tags --category --comment
//!
//! # Everything, without touching a site
//! wp-populate --dry-run all
//! ```

use clap::Args;
use std::path::PathBuf;

pub mod cli;
pub mod config;
pub mod populate;

/// WordPress connection options.
///
/// Every field is optional here; missing values fall back to the
/// `--config` profile and then to built-in defaults (see [`config::Settings`]).
#[derive(Args, Clone, Debug, Default)]
pub struct ConnectionOpts {
    /// WordPress site URL
    #[arg(long, env = "WP_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// WordPress username owning the application password
    #[arg(long, env = "WP_USERNAME", global = true)]
    pub username: Option<String>,

    /// Application password for REST API authentication
    #[arg(long, env = "WP_APPLICATION_PASSWORD", hide_env_values = true, global = true)]
    pub application_password: Option<String>,

    /// HTTP request timeout, e.g. "30", "30s", "5m"
    #[arg(long, env = "WP_TIMEOUT", global = true)]
    pub timeout: Option<String>,

    /// TOML connection profile
    #[arg(long, value_name = "PATH", env = "WP_POPULATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Featured image URL template; "{id}" is replaced by a number from 1 to 10
    #[arg(long, env = "WP_IMAGE_URL", global = true)]
    pub image_url: Option<String>,
}

/// Options controlling a single run.
#[derive(Args, Clone, Debug, Default)]
pub struct RunOpts {
    /// Random seed for reproducible content (same seed = same data)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Generate into an in-memory store instead of the site
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Hide progress bars
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}
