// src/cli/args.rs
use crate::constants::{
    DEFAULT_ACCENT_COLOR, DEFAULT_EDITOR_FONT_SIZE, DEFAULT_EDITOR_HEIGHT, DEFAULT_FONT_SIZE,
    DEFAULT_SITE_TITLE, DEFAULT_THEME,
};
use crate::domain::SettingsRecord;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Application root holding `notes/` and `settings.json` (default: data dir)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the notes directory under the application root
    Init,

    /// List all notes
    List {
        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a note to HTML
    View {
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Output slug, title and HTML as JSON
        #[arg(long, conflicts_with = "open")]
        json: bool,

        /// Open the rendered note in the browser
        #[arg(long)]
        open: bool,
    },

    /// Show the editor form of a note
    Edit {
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Output the form as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the blank form for a new note
    New {
        /// Output the form as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note from a title; the slug is derived from the title
    Create {
        #[arg(value_name = "TITLE")]
        title: String,

        #[command(flatten)]
        input: ContentInput,
    },

    /// Overwrite the content of a note
    Save {
        #[arg(value_name = "SLUG")]
        slug: String,

        #[command(flatten)]
        input: ContentInput,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// Show or save display settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Where note content comes from; stdin when neither is given
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentInput {
    /// Note content as text
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    pub content: Option<String>,

    /// Read note content from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsAction {
    /// Print the current settings as JSON
    Show,

    /// Replace all settings; omitted options take their default value
    Save(SettingsForm),
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    #[arg(long, default_value = DEFAULT_SITE_TITLE)]
    pub site_title: String,

    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    #[arg(long, default_value = DEFAULT_ACCENT_COLOR)]
    pub accent_color: String,

    #[arg(long, default_value_t = DEFAULT_EDITOR_HEIGHT)]
    pub editor_height: i64,

    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: i64,

    #[arg(long, default_value_t = DEFAULT_EDITOR_FONT_SIZE)]
    pub editor_font_size: i64,

    /// Unset means off
    #[arg(long)]
    pub show_line_numbers: bool,

    /// Unset means off
    #[arg(long)]
    pub auto_save: bool,
}

impl From<SettingsForm> for SettingsRecord {
    fn from(form: SettingsForm) -> Self {
        Self {
            site_title: form.site_title,
            theme: form.theme,
            accent_color: form.accent_color,
            editor_height: form.editor_height,
            font_size: form.font_size,
            editor_font_size: form.editor_font_size,
            show_line_numbers: form.show_line_numbers,
            auto_save: form.auto_save,
        }
    }
}
