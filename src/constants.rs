// src/constants.rs
//
// Application-wide constants: file layout, settings defaults and renderer markup.
// Each constant is documented with its purpose and usage context.

/// Name of the directory, inside the application root, that holds the notes.
///
/// When this directory is missing at startup the parent of the application root
/// is used instead; the decision is made once per process.
///
/// Used in: `infrastructure/workspace.rs`
pub const NOTES_SUBDIR: &str = "notes";

/// File extension of a stored note, without the dot.
///
/// Used in: `infrastructure/filesystem.rs`
pub const NOTE_EXTENSION: &str = "md";

/// Settings file name, inside the application root.
///
/// Used in: `infrastructure/workspace.rs`
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directory name below the platform data dir used when no `--root` is given.
///
/// Used in: `lib.rs`
pub const APP_DIR_NAME: &str = "notewall";

// Settings defaults. A field missing from `settings.json` takes these values.
//
// Used in: `domain/settings.rs`, `cli/args.rs`
pub const DEFAULT_SITE_TITLE: &str = "Notewall";
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_ACCENT_COLOR: &str = "#6366f1";
pub const DEFAULT_EDITOR_HEIGHT: i64 = 500;
pub const DEFAULT_FONT_SIZE: i64 = 16;
pub const DEFAULT_EDITOR_FONT_SIZE: i64 = 15;
pub const DEFAULT_SHOW_LINE_NUMBERS: bool = false;
pub const DEFAULT_AUTO_SAVE: bool = false;

/// Title of the blank form for a note that has no slug yet.
///
/// Used in: `application/note_editor.rs`
pub const NEW_NOTE_TITLE: &str = "New Note";

/// Paragraph text replaced by the generated table of contents.
///
/// Used in: `infrastructure/markdown.rs`
pub const TOC_MARKER: &str = "[TOC]";

/// CSS class of the table of contents container.
///
/// Used in: `infrastructure/markdown.rs`
pub const TOC_CSS_CLASS: &str = "toc";

/// CSS class of the wrapper around every fenced or indented code block.
///
/// Used in: `infrastructure/highlight.rs`
pub const CODE_CSS_CLASS: &str = "highlight";

/// Delay in milliseconds after spawning the browser before the process may exit.
///
/// The rendered note lives in a temporary directory that is removed when the
/// process ends; the browser needs a moment to load it first.
///
/// Used in: `infrastructure/browser.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
