//! Document tree: body content, lists, inline objects and tables.

use super::style::{ParagraphStyle, TextStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A fetched document. Read-only input to the Markdown export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Body,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub lists: HashMap<String, List>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub inline_objects: HashMap<String, InlineObject>,
}

impl Document {
    pub fn with_content(content: Vec<StructuralElement>) -> Self {
        Document {
            body: Body { content },
            ..Document::default()
        }
    }

    /// Parse the JSON returned by the document API.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Glyph type of `list_id` at `nesting_level`, if the list defines one.
    pub fn glyph_type(&self, list_id: &str, nesting_level: usize) -> Option<GlyphType> {
        self.lists
            .get(list_id)?
            .list_properties
            .nesting_levels
            .get(nesting_level)?
            .glyph_type
    }

    pub fn inline_object(&self, object_id: &str) -> Option<&InlineObject> {
        self.inline_objects.get(object_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// Result of the Markdown import: content ready for a batch insert into a document.
///
/// The caller sequences insertion offsets; nothing here tracks absolute indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl DocumentRequest {
    pub fn into_document(self) -> Document {
        Document {
            title: self.title,
            body: Body {
                content: self.content,
            },
            ..Document::default()
        }
    }
}

/// One body-level node of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStructuralElement", into = "RawStructuralElement")]
pub enum StructuralElement {
    Paragraph(Paragraph),
    Table(Table),
    TableOfContents,
    SectionBreak,
    /// No recognized field was populated.
    Unsupported,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStructuralElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph: Option<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table: Option<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_of_contents: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    section_break: Option<Value>,
}

impl From<RawStructuralElement> for StructuralElement {
    fn from(raw: RawStructuralElement) -> Self {
        if let Some(paragraph) = raw.paragraph {
            StructuralElement::Paragraph(paragraph)
        } else if let Some(table) = raw.table {
            StructuralElement::Table(table)
        } else if raw.table_of_contents.is_some() {
            StructuralElement::TableOfContents
        } else if raw.section_break.is_some() {
            StructuralElement::SectionBreak
        } else {
            StructuralElement::Unsupported
        }
    }
}

impl From<StructuralElement> for RawStructuralElement {
    fn from(element: StructuralElement) -> Self {
        let empty = || Some(Value::Object(Default::default()));
        match element {
            StructuralElement::Paragraph(paragraph) => RawStructuralElement {
                paragraph: Some(paragraph),
                ..Default::default()
            },
            StructuralElement::Table(table) => RawStructuralElement {
                table: Some(table),
                ..Default::default()
            },
            StructuralElement::TableOfContents => RawStructuralElement {
                table_of_contents: empty(),
                ..Default::default()
            },
            StructuralElement::SectionBreak => RawStructuralElement {
                section_break: empty(),
                ..Default::default()
            },
            StructuralElement::Unsupported => RawStructuralElement::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
    #[serde(default)]
    pub paragraph_style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(elements: Vec<ParagraphElement>) -> Self {
        Paragraph {
            elements,
            ..Paragraph::default()
        }
    }

    /// Paragraph made of the given text runs.
    pub fn from_runs(runs: impl IntoIterator<Item = TextRun>) -> Self {
        Paragraph::new(runs.into_iter().map(ParagraphElement::TextRun).collect())
    }

    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = style;
        self
    }

    pub fn with_bullet(mut self, list_id: impl Into<String>, nesting_level: usize) -> Self {
        self.bullet = Some(Bullet {
            list_id: Some(list_id.into()),
            nesting_level,
        });
        self
    }
}

impl From<Paragraph> for StructuralElement {
    fn from(paragraph: Paragraph) -> Self {
        StructuralElement::Paragraph(paragraph)
    }
}

/// Marks a paragraph as a list item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default)]
    pub nesting_level: usize,
}

/// One inline node of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParagraphElement", into = "RawParagraphElement")]
pub enum ParagraphElement {
    TextRun(TextRun),
    InlineObject(InlineObjectElement),
    PageBreak,
    FootnoteReference(FootnoteReference),
    HorizontalRule,
    Equation,
    /// No recognized field was populated (auto text, person chips, ...).
    Unsupported,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParagraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_run: Option<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_object_element: Option<InlineObjectElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_break: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    footnote_reference: Option<FootnoteReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    horizontal_rule: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    equation: Option<Value>,
}

impl From<RawParagraphElement> for ParagraphElement {
    fn from(raw: RawParagraphElement) -> Self {
        if let Some(run) = raw.text_run {
            ParagraphElement::TextRun(run)
        } else if let Some(object) = raw.inline_object_element {
            ParagraphElement::InlineObject(object)
        } else if raw.page_break.is_some() {
            ParagraphElement::PageBreak
        } else if let Some(footnote) = raw.footnote_reference {
            ParagraphElement::FootnoteReference(footnote)
        } else if raw.horizontal_rule.is_some() {
            ParagraphElement::HorizontalRule
        } else if raw.equation.is_some() {
            ParagraphElement::Equation
        } else {
            ParagraphElement::Unsupported
        }
    }
}

impl From<ParagraphElement> for RawParagraphElement {
    fn from(element: ParagraphElement) -> Self {
        let empty = || Some(Value::Object(Default::default()));
        match element {
            ParagraphElement::TextRun(run) => RawParagraphElement {
                text_run: Some(run),
                ..Default::default()
            },
            ParagraphElement::InlineObject(object) => RawParagraphElement {
                inline_object_element: Some(object),
                ..Default::default()
            },
            ParagraphElement::PageBreak => RawParagraphElement {
                page_break: empty(),
                ..Default::default()
            },
            ParagraphElement::FootnoteReference(footnote) => RawParagraphElement {
                footnote_reference: Some(footnote),
                ..Default::default()
            },
            ParagraphElement::HorizontalRule => RawParagraphElement {
                horizontal_rule: empty(),
                ..Default::default()
            },
            ParagraphElement::Equation => RawParagraphElement {
                equation: empty(),
                ..Default::default()
            },
            ParagraphElement::Unsupported => RawParagraphElement::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub text_style: TextStyle,
}

impl TextRun {
    pub fn plain(content: impl Into<String>) -> Self {
        TextRun {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    pub fn styled(content: impl Into<String>, text_style: TextStyle) -> Self {
        TextRun {
            content: content.into(),
            text_style,
        }
    }
}

impl From<TextRun> for ParagraphElement {
    fn from(run: TextRun) -> Self {
        ParagraphElement::TextRun(run)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_object_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootnoteReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote_id: Option<String>,
}

/// A list definition, keyed by list id in [`Document::lists`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default)]
    pub list_properties: ListProperties,
}

impl List {
    /// List whose levels use the given glyph types, outermost first.
    pub fn with_glyphs(glyphs: impl IntoIterator<Item = GlyphType>) -> Self {
        List {
            list_properties: ListProperties {
                nesting_levels: glyphs
                    .into_iter()
                    .map(|glyph| NestingLevel {
                        glyph_type: Some(glyph),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProperties {
    #[serde(default)]
    pub nesting_levels: Vec<NestingLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_type: Option<GlyphType>,
}

/// Marker kind of a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphType {
    GlyphTypeUnspecified,
    None,
    Decimal,
    DecimalNested,
    ZeroDecimal,
    UpperAlpha,
    Alpha,
    UpperRoman,
    Roman,
    #[serde(other)]
    Other,
}

impl GlyphType {
    /// Whether items at this level carry an ordinal rather than a bullet.
    pub fn is_numbered(self) -> bool {
        matches!(
            self,
            GlyphType::Decimal
                | GlyphType::DecimalNested
                | GlyphType::ZeroDecimal
                | GlyphType::UpperAlpha
                | GlyphType::Alpha
                | GlyphType::UpperRoman
                | GlyphType::Roman
        )
    }
}

/// An embedded object, keyed by object id in [`Document::inline_objects`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_object_properties: Option<InlineObjectProperties>,
}

impl InlineObject {
    pub fn embedded_object(&self) -> Option<&EmbeddedObject> {
        self.inline_object_properties
            .as_ref()?
            .embedded_object
            .as_ref()
    }

    pub fn image(title: Option<&str>, content_uri: Option<&str>) -> Self {
        InlineObject {
            inline_object_properties: Some(InlineObjectProperties {
                embedded_object: Some(EmbeddedObject {
                    title: title.map(str::to_string),
                    image_properties: Some(ImageProperties {
                        content_uri: content_uri.map(str::to_string),
                    }),
                }),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_object: Option<EmbeddedObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_properties: Option<ImageProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Table with `rows`/`columns` counts derived from the given rows.
    pub fn from_rows(table_rows: Vec<TableRow>) -> Self {
        let columns = table_rows.first().map_or(0, |row| row.table_cells.len());
        Table {
            rows: Some(table_rows.len()),
            columns: Some(columns),
            table_rows,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    pub fn from_elements(content: Vec<StructuralElement>) -> Self {
        TableCell { content }
    }
}
