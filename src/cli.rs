//! Command-line definition.

use crate::populate::PopulateCommand;
use crate::{ConnectionOpts, RunOpts};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wp-populate")]
#[command(version)]
#[command(about = "Populate a WordPress site with synthetic content for development and testing")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionOpts,

    #[command(flatten)]
    pub run: RunOpts,

    #[command(subcommand)]
    pub command: PopulateCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use populate_seeder::{CountArgs, PostArgs};

    #[test]
    fn test_parse_count_subcommands() {
        let cli = Cli::try_parse_from(["wp-populate", "category"]).unwrap();
        assert_eq!(cli.command, PopulateCommand::Category(CountArgs { count: 5 }));

        let cli = Cli::try_parse_from(["wp-populate", "page", "--count=2"]).unwrap();
        assert_eq!(cli.command, PopulateCommand::Page(CountArgs { count: 2 }));

        let cli = Cli::try_parse_from(["wp-populate", "author", "--count", "0"]).unwrap();
        assert_eq!(cli.command, PopulateCommand::Author(CountArgs { count: 0 }));
    }

    #[test]
    fn test_parse_post() {
        let cli =
            Cli::try_parse_from(["wp-populate", "post", "--count=3", "--tags=true"]).unwrap();

        match cli.command {
            PopulateCommand::Post(PostArgs {
                count, tags, all, ..
            }) => {
                assert_eq!(count, 3);
                assert!(tags);
                assert!(!all);
            }
            other => panic!("Expected post, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_all_takes_no_options() {
        let cli = Cli::try_parse_from(["wp-populate", "all"]).unwrap();
        assert_eq!(cli.command, PopulateCommand::All);

        assert!(Cli::try_parse_from(["wp-populate", "all", "--count=3"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wp-populate",
            "tag",
            "--dry-run",
            "--seed",
            "7",
            "--endpoint",
            "https://blog.test",
        ])
        .unwrap();

        assert!(cli.run.dry_run);
        assert_eq!(cli.run.seed, Some(7));
        assert_eq!(cli.connection.endpoint.as_deref(), Some("https://blog.test"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["wp-populate"]).is_err());
        assert!(Cli::try_parse_from(["wp-populate", "widgets"]).is_err());
    }
}
