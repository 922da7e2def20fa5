//! Notepad desktop app: a single untitled scratch document with live text statistics.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use system_ui::prelude::*;

/// Character and word counts for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Unicode scalar values in the document.
    pub chars: usize,
    /// Whitespace-delimited words.
    pub words: usize,
}

impl TextStats {
    /// Counts `text`.
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    fn status_line(self) -> String {
        format!("{} characters | {} words", self.chars, self.words)
    }
}

#[component]
/// Notepad window contents. The document lives only as long as the window.
pub fn NotepadApp() -> impl IntoView {
    let text = create_rw_signal(String::new());
    let stats = Signal::derive(move || text.with(|text| TextStats::of(text)));

    view! {
        <div class="app-shell app-notepad-shell">
            <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="notepad-title">
                "Untitled - Notepad"
            </Text>
            <TextArea
                ui_slot="notepad-editor"
                placeholder="Start typing..."
                aria_label="Notepad document"
                value=text
                on_input=Callback::new(move |ev| text.set(event_target_value(&ev)))
            />
            <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="notepad-status">
                {move || stats.get().status_line()}
            </Text>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_has_no_words() {
        assert_eq!(TextStats::of(""), TextStats::default());
        assert_eq!(TextStats::of("  \n\t ").words, 0);
    }

    #[test]
    fn words_split_on_any_whitespace() {
        let stats = TextStats::of("hello  world\nfrom\tnotepad ");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.chars, 26);
    }

    #[test]
    fn status_line_reads_naturally() {
        assert_eq!(
            TextStats::of("one two").status_line(),
            "7 characters | 2 words"
        );
    }
}
