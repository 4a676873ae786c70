// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Studying:
  select      Choose the questions to study
  quiz        Run a quiz over the selected questions
  flashcard   Flip through the selected questions as flashcards
  status      Show selection, sessions, and sync state

Sync & Data:
  sync        Deliver queued updates and refresh the progress cache
  export      Export all local study state to a file
  import      Import study state from an exported file
  clear       Delete all local study state

Setup:
  init        Initialize a study directory";

const QUICKSTART_HELP: &str = "\
Get started:
  cram init                     Initialize in the current directory
  cram select questions.json    Load a question file
  cram quiz                     Start (or resume) a quiz
  cram sync                     Push queued answers to the sheet";

#[derive(Parser)]
#[command(name = "cram")]
#[command(about = "An offline-first quiz and flashcard runner synced to a spreadsheet")]
#[command(
    long_about = "An offline-first quiz and flashcard runner.\n\n\
    Progress lives in a spreadsheet web app; answers given offline are \
    queued locally and delivered on the next sync."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a .cram study directory
    #[command(after_help = "Examples:\n  \
        cram init                                  Local-only mode\n  \
        cram init --endpoint <url> --sheet vocab   With remote sync")]
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<String>,

        /// Deployed web app URL for remote sync
        #[arg(long)]
        endpoint: Option<String>,

        /// Sheet name holding the progress rows
        #[arg(long, requires = "endpoint")]
        sheet: Option<String>,
    },

    /// Choose the questions to study
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        cram select questions.json                Study the whole file\n  \
        cram select questions.json -s 11 -e 20    Study questions 11-20\n  \
        cram select questions.json --from-last    Resume after the last studied row"
    )]
    Select {
        /// JSON file with the question list
        file: String,

        /// First question to include (1-based, default 1)
        #[arg(long, short)]
        start: Option<usize>,

        /// Last question to include (1-based inclusive, default all)
        #[arg(long, short)]
        end: Option<usize>,

        /// Start right after the most recently studied question
        #[arg(long, conflicts_with = "start")]
        from_last: bool,
    },

    /// Run a quiz over the selected questions
    Quiz,

    /// Flip through the selected questions as flashcards
    Flashcard,

    /// Show selection, sessions, and sync state
    Status,

    /// Deliver queued updates and refresh the progress cache
    Sync,

    /// Export all local study state to a file
    #[command(arg_required_else_help = true)]
    Export {
        /// Destination file
        filepath: String,
    },

    /// Import study state from an exported file
    #[command(arg_required_else_help = true)]
    Import {
        /// Bundle file produced by `cram export`
        file: String,
    },

    /// Delete all local study state (selection, sessions, cache, queue)
    Clear,
}
