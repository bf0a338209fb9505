//! Populate subcommands and their dispatch onto the seeder.

mod logging;
mod run;

pub use logging::mask_credentials;
pub use run::run_populate;

use clap::Subcommand;
use populate_seeder::{CountArgs, PostArgs, PostOptions, Seeder, SeederError};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PopulateCommand {
    /// Create categories with single-word names
    Category(CountArgs),

    /// Create tags with single-word names
    Tag(CountArgs),

    /// Create users with the author role
    Author(CountArgs),

    /// Create published pages
    Page(CountArgs),

    /// Create published posts, optionally with tags, a category, an author,
    /// comments and a featured image
    Post(PostArgs),

    /// Create 5 fully associated posts and 5 pages
    All,
}

impl PopulateCommand {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PopulateCommand::Category(_) => "category",
            PopulateCommand::Tag(_) => "tag",
            PopulateCommand::Author(_) => "author",
            PopulateCommand::Page(_) => "page",
            PopulateCommand::Post(_) => "post",
            PopulateCommand::All => "all",
        }
    }
}

/// Run one subcommand against a seeder.
pub async fn execute(seeder: &mut Seeder, command: &PopulateCommand) -> Result<(), SeederError> {
    match command {
        PopulateCommand::Category(args) => {
            seeder.create_categories(args.count).await?;
        }
        PopulateCommand::Tag(args) => {
            seeder.create_tags(args.count).await?;
        }
        PopulateCommand::Author(args) => {
            seeder.create_authors(args.count).await?;
        }
        PopulateCommand::Page(args) => {
            seeder.create_pages(args.count).await?;
        }
        PopulateCommand::Post(args) => {
            seeder.create_posts(&PostOptions::from(args)).await?;
        }
        PopulateCommand::All => seeder.populate_all().await?,
    }
    Ok(())
}
