//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::draft::Filter;

#[derive(Parser, Debug)]
#[command(name = "drafts")]
#[command(author, version, about = "Work with the Drafts app from the command line", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "DRAFTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Program used to run AppleScript (overrides the config file)
    #[arg(long, global = true, env = "DRAFTS_INTERPRETER", value_name = "PROGRAM")]
    pub interpreter: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SubCommand {
    /// Create a new draft
    New {
        /// Draft content (omit to use stdin)
        text: Option<String>,

        /// Tag to add (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Create the draft in the archive
        #[arg(short, long)]
        archive: bool,

        /// Create a flagged draft
        #[arg(short, long)]
        flagged: bool,

        /// Action to run on the new draft
        #[arg(long, value_name = "NAME")]
        action: Option<String>,
    },

    /// Prepend to a draft
    Prepend {
        /// Text to prepend (omit to use stdin)
        text: Option<String>,

        /// UUID (omit to use the active draft)
        #[arg(short, long)]
        uuid: Option<String>,

        /// Tag to add (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Action to run on the draft afterwards
        #[arg(long, value_name = "NAME")]
        action: Option<String>,
    },

    /// Append to a draft
    Append {
        /// Text to append (omit to use stdin)
        text: Option<String>,

        /// UUID (omit to use the active draft)
        #[arg(short, long)]
        uuid: Option<String>,

        /// Tag to add (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Action to run on the draft afterwards
        #[arg(long, value_name = "NAME")]
        action: Option<String>,
    },

    /// Replace the content of a draft
    Replace {
        /// New content (omit to use stdin)
        text: Option<String>,

        /// UUID (omit to use the active draft)
        #[arg(short, long)]
        uuid: Option<String>,
    },

    /// Edit a draft in $EDITOR
    Edit {
        /// UUID (omit to use the active draft)
        uuid: Option<String>,
    },

    /// Print the content of a draft
    Get {
        /// UUID (omit to use the active draft)
        uuid: Option<String>,
    },

    /// Show every field of a draft
    Info {
        /// UUID (omit to use the active draft)
        uuid: Option<String>,
    },

    /// Select the active draft using fzf
    Select,

    /// List drafts
    List {
        /// Which drafts to list
        #[arg(short, long, value_enum, default_value_t = Filter::Inbox)]
        filter: Filter,

        /// Only drafts with this tag (repeatable, all must match)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Skip drafts with this tag (repeatable)
        #[arg(short = 'x', long = "omit-tag", value_name = "TAG")]
        omit_tags: Vec<String>,
    },

    /// Move a draft to the trash
    Trash {
        /// UUID (omit to use the active draft)
        uuid: Option<String>,
    },

    /// Move a draft to the archive
    Archive {
        /// UUID (omit to use the active draft)
        uuid: Option<String>,
    },

    /// Add tags to a draft
    Tag {
        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,

        /// UUID (omit to use the active draft)
        #[arg(short, long)]
        uuid: Option<String>,
    },

    /// Run a Drafts action on new text
    Run {
        /// Action name as shown in Drafts
        action: String,

        /// Text for the new draft (omit to use stdin)
        text: Option<String>,
    },

    /// Show version information
    Version,
}
