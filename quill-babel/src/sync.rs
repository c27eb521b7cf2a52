//! Note synchronization with a remote document service
//!
//!     Notes are stored as Markdown; their documents live in a remote service that speaks
//!     the document tree. This module moves content between the two using the converters
//!     in [`crate::formats::markdown`]. Both sides sit behind traits so the library never
//!     does I/O of its own.
//!
//!     - pull / stage: document → Markdown → note content (or staged content)
//!     - push: note Markdown → document content, into the backing document or a new one
//!     - push_many: several notes into one new document, each under a bold header
//!     - adopt: a new note backed by an existing document
//!     - create_backing_document: an empty document linked to an existing note
//!
//!     Failures are not retried and nothing is transactional: a push that creates a
//!     document and then fails to write leaves the empty document behind.

use crate::formats::markdown::parser::parse_from_markdown_with_options;
use crate::formats::markdown::serializer::serialize_to_markdown_with_options;
use crate::formats::markdown::{MarkdownExportOptions, MarkdownImportOptions};
use crate::model::{Document, Paragraph, StructuralElement, TextRun, TextStyle};
use async_trait::async_trait;
use std::fmt;

/// Tag marking a note as backed by a remote document.
pub const DEFAULT_NOTE_TAG: &str = "google-note";

/// Errors from note synchronization
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// No note with this id
    NoteNotFound(String),
    /// The note has no backing document to pull from
    NotDocumentBacked(String),
    /// None of the requested notes exist
    NoNotes,
    /// The document service failed
    Remote(String),
    /// The note store failed
    Store(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::NoteNotFound(id) => write!(f, "Note '{id}' not found"),
            SyncError::NotDocumentBacked(id) => {
                write!(f, "Note '{id}' is not backed by a document")
            }
            SyncError::NoNotes => write!(f, "No valid notes found"),
            SyncError::Remote(msg) => write!(f, "Document service error: {msg}"),
            SyncError::Store(msg) => write!(f, "Note store error: {msg}"),
        }
    }
}

impl std::error::Error for SyncError {}

/// A Markdown note as kept by the note store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub document_id: Option<String>,
    pub staged_content: Option<String>,
}

impl Note {
    /// Id of the backing document, if the note carries `tag` and has one.
    pub fn backing_document(&self, tag: &str) -> Option<&str> {
        if self.tags.iter().any(|t| t == tag) {
            self.document_id.as_deref()
        } else {
            None
        }
    }
}

/// Remote document service.
///
/// Implementations must be `Send + Sync`; the sync service may be shared across tasks.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Fetch a document as a tree.
    async fn fetch_document(&self, user_id: &str, document_id: &str)
        -> Result<Document, SyncError>;

    /// Create an empty document and return its id.
    async fn create_document(&self, user_id: &str, title: &str) -> Result<String, SyncError>;

    /// Append content to a document. The service sequences insertion offsets.
    async fn write_content(
        &self,
        user_id: &str,
        document_id: &str,
        content: &[StructuralElement],
    ) -> Result<(), SyncError>;
}

/// Persistence for Markdown notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn get_note(&self, note_id: &str) -> Result<Option<Note>, SyncError>;

    /// Create an empty note and return it with its store-assigned id.
    async fn create_note(
        &self,
        title: &str,
        tags: &[String],
        document_id: Option<&str>,
    ) -> Result<Note, SyncError>;

    async fn update_note_content(&self, note_id: &str, markdown: &str) -> Result<(), SyncError>;

    async fn update_staged_content(&self, note_id: &str, markdown: &str)
        -> Result<(), SyncError>;

    /// Record `document_id` as the note's backing document and replace its tags.
    async fn link_document(
        &self,
        note_id: &str,
        document_id: &str,
        tags: &[String],
    ) -> Result<(), SyncError>;
}

/// Result of a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub document_id: String,
    pub document_url: String,
    pub is_new_document: bool,
}

impl PushOutcome {
    fn new(document_id: String, is_new_document: bool) -> Self {
        PushOutcome {
            document_url: document_url(&document_id),
            document_id,
            is_new_document,
        }
    }
}

/// Edit URL of a document.
pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}/edit")
}

/// Settings of a [`NoteSync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Tag marking document-backed notes.
    pub note_tag: String,
    pub export: MarkdownExportOptions,
    pub import: MarkdownImportOptions,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            note_tag: DEFAULT_NOTE_TAG.to_string(),
            export: MarkdownExportOptions::default(),
            import: MarkdownImportOptions::default(),
        }
    }
}

/// Moves content between a [`NoteStore`] and a [`DocumentService`].
pub struct NoteSync<D, N> {
    documents: D,
    notes: N,
    options: SyncOptions,
}

impl<D: DocumentService, N: NoteStore> NoteSync<D, N> {
    pub fn new(documents: D, notes: N) -> Self {
        Self::with_options(documents, notes, SyncOptions::default())
    }

    pub fn with_options(documents: D, notes: N, options: SyncOptions) -> Self {
        NoteSync {
            documents,
            notes,
            options,
        }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    pub fn documents(&self) -> &D {
        &self.documents
    }

    pub fn notes(&self) -> &N {
        &self.notes
    }

    /// Replace the note's content with its document, converted to Markdown.
    pub async fn pull(&self, note_id: &str, user_id: &str) -> Result<String, SyncError> {
        let markdown = self.fetch_markdown(note_id, user_id).await?;
        self.notes.update_note_content(note_id, &markdown).await?;
        tracing::info!(note_id, bytes = markdown.len(), "pulled note from document");
        Ok(markdown)
    }

    /// Store the converted document as the note's staged content, leaving the content as is.
    pub async fn stage(&self, note_id: &str, user_id: &str) -> Result<String, SyncError> {
        let markdown = self.fetch_markdown(note_id, user_id).await?;
        self.notes.update_staged_content(note_id, &markdown).await?;
        tracing::info!(note_id, bytes = markdown.len(), "staged document content");
        Ok(markdown)
    }

    /// Write the note into its backing document, or into a new document if it has none.
    ///
    /// With `link`, a newly created document becomes the note's backing document.
    pub async fn push(
        &self,
        note_id: &str,
        user_id: &str,
        link: bool,
    ) -> Result<PushOutcome, SyncError> {
        let note = self.require_note(note_id).await?;
        let request = parse_from_markdown_with_options(
            &note.content,
            Some(&note.title),
            &self.options.import,
        );

        if let Some(document_id) = note.backing_document(&self.options.note_tag) {
            self.documents
                .write_content(user_id, document_id, &request.content)
                .await?;
            tracing::info!(note_id, document_id, "pushed note to its document");
            return Ok(PushOutcome::new(document_id.to_string(), false));
        }

        let document_id = self
            .documents
            .create_document(user_id, &note.title)
            .await?;
        self.documents
            .write_content(user_id, &document_id, &request.content)
            .await?;

        if link {
            self.link(&note, &document_id).await?;
        }

        tracing::info!(note_id, document_id = %document_id, link, "pushed note to new document");
        Ok(PushOutcome::new(document_id, true))
    }

    /// Create a note backed by an existing document, titled after it.
    ///
    /// The note starts empty; a [`pull`](Self::pull) fills it.
    pub async fn adopt(&self, user_id: &str, document_id: &str) -> Result<Note, SyncError> {
        let document = self.documents.fetch_document(user_id, document_id).await?;
        let title = document.title.as_deref().unwrap_or_default();

        let note = self
            .notes
            .create_note(title, &[self.options.note_tag.clone()], Some(document_id))
            .await?;
        tracing::info!(note_id = %note.id, document_id, "adopted document as note");
        Ok(note)
    }

    /// Give a note an empty backing document titled after it.
    ///
    /// A note that is already document-backed keeps its document.
    pub async fn create_backing_document(
        &self,
        note_id: &str,
        user_id: &str,
    ) -> Result<PushOutcome, SyncError> {
        let note = self.require_note(note_id).await?;
        if let Some(document_id) = note.backing_document(&self.options.note_tag) {
            return Ok(PushOutcome::new(document_id.to_string(), false));
        }

        let document_id = self
            .documents
            .create_document(user_id, &note.title)
            .await?;
        self.link(&note, &document_id).await?;

        tracing::info!(note_id, document_id = %document_id, "created backing document");
        Ok(PushOutcome::new(document_id, true))
    }

    /// Write several notes into one new document titled `title`.
    ///
    /// Missing notes are skipped.
    pub async fn push_many(
        &self,
        note_ids: &[&str],
        user_id: &str,
        title: &str,
    ) -> Result<PushOutcome, SyncError> {
        let mut notes = Vec::with_capacity(note_ids.len());
        for note_id in note_ids {
            match self.notes.get_note(note_id).await? {
                Some(note) => notes.push(note),
                None => tracing::warn!(note_id, "skipping missing note"),
            }
        }
        if notes.is_empty() {
            return Err(SyncError::NoNotes);
        }

        let mut content = Vec::new();
        for note in &notes {
            content.push(section_header(&note.title));
            let request =
                parse_from_markdown_with_options(&note.content, None, &self.options.import);
            content.extend(request.content);
        }

        let document_id = self.documents.create_document(user_id, title).await?;
        self.documents
            .write_content(user_id, &document_id, &content)
            .await?;

        tracing::info!(
            notes = notes.len(),
            document_id = %document_id,
            "pushed notes to new document"
        );
        Ok(PushOutcome::new(document_id, true))
    }

    /// Make `document_id` the note's backing document, adding the backing tag.
    async fn link(&self, note: &Note, document_id: &str) -> Result<(), SyncError> {
        let mut tags = note.tags.clone();
        if !tags.contains(&self.options.note_tag) {
            tags.push(self.options.note_tag.clone());
        }
        self.notes.link_document(&note.id, document_id, &tags).await
    }

    async fn require_note(&self, note_id: &str) -> Result<Note, SyncError> {
        self.notes
            .get_note(note_id)
            .await?
            .ok_or_else(|| SyncError::NoteNotFound(note_id.to_string()))
    }

    async fn fetch_markdown(&self, note_id: &str, user_id: &str) -> Result<String, SyncError> {
        let note = self.require_note(note_id).await?;
        let Some(document_id) = note.backing_document(&self.options.note_tag) else {
            tracing::warn!(note_id, "note has no backing document");
            return Err(SyncError::NotDocumentBacked(note_id.to_string()));
        };

        let document = self.documents.fetch_document(user_id, document_id).await?;
        Ok(serialize_to_markdown_with_options(
            &document,
            &self.options.export,
        ))
    }
}

fn section_header(title: &str) -> StructuralElement {
    Paragraph::from_runs([TextRun::styled(
        format!("\n--- {title} ---\n\n"),
        TextStyle::bold(),
    )])
    .into()
}
