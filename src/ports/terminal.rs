// src/ports/terminal.rs
use crate::domain::{EditorForm, NoteSummary, Settings};

/// Plain-text views of listings and forms for the terminal.
#[derive(Debug)]
pub struct TerminalPresenter {
    site_title: String,
}

impl TerminalPresenter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            site_title: settings.site_title().to_string(),
        }
    }

    pub fn note_list(&self, notes: &[NoteSummary]) -> String {
        let mut out = format!("{}\n", self.site_title);
        if notes.is_empty() {
            out.push_str("  (no notes yet)\n");
            return out;
        }

        let width = notes.iter().map(|n| n.slug.chars().count()).max().unwrap_or(0);
        for note in notes {
            out.push_str(&format!("  {:<width$}  {}\n", note.slug, note.name));
        }
        out
    }

    pub fn editor_form(&self, form: &EditorForm) -> String {
        let status = if form.is_new { "new" } else { "existing" };
        let mut out = format!("{} - {}\nslug: {}\nstatus: {}\n", self.site_title, form.title, form.slug, status);
        if !form.content.is_empty() {
            out.push('\n');
            out.push_str(&form.content);
            if !form.content.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}
