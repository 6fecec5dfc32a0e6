use crate::generator::UuidFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uuidtui")]
#[command(version)]
#[command(about = "Generate version-4 UUIDs and copy them to the clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print freshly generated UUIDs, one per line
    New {
        /// How many to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Output format: hyphenated, simple, urn or braced
        #[arg(short, long)]
        format: Option<UuidFormat>,

        /// Uppercase hex digits
        #[arg(short, long)]
        upper: bool,
    },
    /// Generate one UUID, print it and copy it to the clipboard
    ///
    /// On Linux the command stays running until something else is copied,
    /// because the clipboard is served by the process that set it.
    Copy {
        /// Output format: hyphenated, simple, urn or braced
        #[arg(short, long)]
        format: Option<UuidFormat>,

        /// Uppercase hex digits
        #[arg(short, long)]
        upper: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["uuidtui"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_new_with_options() {
        let cli = Cli::try_parse_from(["uuidtui", "new", "-n", "3", "--format", "urn", "--upper"])
            .unwrap();
        match cli.command {
            Some(Commands::New {
                count,
                format,
                upper,
            }) => {
                assert_eq!(count, 3);
                assert_eq!(format, Some(UuidFormat::Urn));
                assert!(upper);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["uuidtui", "copy", "--format", "base64"]).is_err());
    }
}
