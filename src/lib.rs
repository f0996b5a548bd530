// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{
    CreateOutcome, NoteDeleter, NoteEditor, NoteLister, NoteViewer, SettingsManager, ViewOutcome,
};
use cli::args::{Args, Command, ContentInput, SettingsAction};
use domain::{ensure_addressable, EditorForm, NotePage};
use infrastructure::{BrowserLauncher, MarkdownRenderer, Workspace};
use ports::TerminalPresenter;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notewall with arguments");

    let root = match args.root {
        Some(path) => {
            debug!(?path, "Using provided application root");
            path
        }
        None => default_app_root()?,
    };

    // Resolved once; every command below works against these paths.
    let workspace = Workspace::resolve(&root)?;
    let settings = SettingsManager::new(workspace.settings_repository()).current();
    let presenter = TerminalPresenter::new(&settings);
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Init => {
            let notes_dir = workspace.preferred_notes_dir();
            std::fs::create_dir_all(&notes_dir)
                .with_context(|| format!("Failed to create {}", notes_dir.display()))?;
            info!(?notes_dir, "Initialised notes directory");
            writeln!(stdout, "Notes directory: {}", notes_dir.display())?;
        }
        Command::List { json } => {
            let notes = NoteLister::new(workspace.note_repository()).list_notes()?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&notes)?)?;
            } else {
                write!(stdout, "{}", presenter.note_list(&notes))?;
            }
        }
        Command::View { slug, json, open } => {
            let slug = ensure_addressable(&slug)?;
            let mut viewer = NoteViewer::new(workspace.note_repository(), MarkdownRenderer::new());
            match viewer.view_note(slug)? {
                ViewOutcome::Rendered(page) => show_page(&mut stdout, &page, json, open)?,
                ViewOutcome::RedirectToEdit(slug) => {
                    info!(slug = %slug, "Note does not exist yet, showing its editor form");
                    let form = NoteEditor::new(workspace.note_repository()).edit_form(&slug)?;
                    show_form(&mut stdout, &presenter, &form, json)?;
                }
            }
        }
        Command::Edit { slug, json } => {
            let slug = ensure_addressable(&slug)?;
            let form = NoteEditor::new(workspace.note_repository()).edit_form(slug)?;
            show_form(&mut stdout, &presenter, &form, json)?;
        }
        Command::New { json } => {
            let form = NoteEditor::new(workspace.note_repository()).new_form();
            show_form(&mut stdout, &presenter, &form, json)?;
        }
        Command::Create { title, input } => {
            let content = read_content(&input)?;
            let mut editor = NoteEditor::new(workspace.note_repository());
            match editor.create_note(&title, &content)? {
                CreateOutcome::Created(slug) => view_saved(&mut stdout, &workspace, &slug)?,
                CreateOutcome::Rejected => {
                    warn!(title = %title, "Nothing written, back to the new note form");
                    write!(stdout, "{}", presenter.editor_form(&editor.new_form()))?;
                    bail!("Title {title:?} has no letters or digits to build a slug from")
                }
            }
        }
        Command::Save { slug, input } => {
            let slug = ensure_addressable(&slug)?;
            let content = read_content(&input)?;
            NoteEditor::new(workspace.note_repository()).save_note(slug, &content)?;
            view_saved(&mut stdout, &workspace, slug)?;
        }
        Command::Delete { slug } => {
            let slug = ensure_addressable(&slug)?;
            let removed = NoteDeleter::new(workspace.note_repository()).delete_note(slug)?;
            if removed {
                writeln!(stdout, "Deleted {slug}")?;
            } else {
                writeln!(stdout, "Nothing to delete for {slug}")?;
            }
        }
        Command::Settings { action } => {
            let manager = SettingsManager::new(workspace.settings_repository());
            let shown = match action {
                SettingsAction::Show => settings,
                SettingsAction::Save(form) => manager.save(form.into())?,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&shown)?)?;
        }
    }

    Ok(())
}

/// `<data dir>/notewall`, used when no root is given on the command line.
pub fn default_app_root() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(data_dir.join(constants::APP_DIR_NAME))
}

fn read_content(input: &ContentInput) -> Result<String> {
    if let Some(content) = &input.content {
        return Ok(content.clone());
    }
    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read note content from {}", path.display()));
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read note content from stdin")?;
    Ok(content)
}

fn view_saved(out: &mut impl Write, workspace: &Workspace, slug: &str) -> Result<()> {
    let mut viewer = NoteViewer::new(workspace.note_repository(), MarkdownRenderer::new());
    match viewer.view_note(slug)? {
        ViewOutcome::Rendered(page) => show_page(out, &page, false, false),
        ViewOutcome::RedirectToEdit(slug) => bail!("Note {slug} vanished right after saving"),
    }
}

fn show_form(
    out: &mut impl Write,
    presenter: &TerminalPresenter,
    form: &EditorForm,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(form)?)?;
    } else {
        write!(out, "{}", presenter.editor_form(form))?;
    }
    Ok(())
}

fn show_page(out: &mut impl Write, page: &NotePage, json: bool, open: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(page)?)?;
    } else if open {
        let mut launcher = BrowserLauncher::new();
        let path = launcher.create_temp_file(&page.slug, &page.html)?;
        info!(slug = %page.slug, ?path, "Opening note in browser");
        launcher.open_in_browser(&path)?;
    } else {
        write!(out, "{}", page.html)?;
    }
    Ok(())
}
