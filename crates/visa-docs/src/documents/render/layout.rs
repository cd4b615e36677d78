//! Declarative page description shared by every document, and the composer that
//! turns it into PDF bytes.

use genpdf::elements::{Break, FrameCellDecorator, LinearLayout, PageBreak, TableLayout};
use genpdf::style::Style;
use genpdf::{error::Error, Alignment, Document, Element, Margins, PaperSize, SimplePageDecorator};

use super::elements::{ColumnDivider, FittedParagraph, Rule, MUTED};
use super::fonts::FontSet;

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

pub fn plain(text: impl Into<String>) -> Span {
    Span {
        text: text.into(),
        bold: false,
    }
}

pub fn bold(text: impl Into<String>) -> Span {
    Span {
        text: text.into(),
        bold: true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

impl Align {
    fn alignment(self) -> Alignment {
        match self {
            Align::Left => Alignment::Left,
            Align::Center => Alignment::Center,
        }
    }
}

/// One language side of a clause: an optional centered heading and its paragraphs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClauseText {
    pub heading: Option<String>,
    pub paragraphs: Vec<Vec<Span>>,
}

impl ClauseText {
    pub fn headed(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            paragraphs: Vec::new(),
        }
    }

    pub fn para(mut self, spans: Vec<Span>) -> Self {
        self.paragraphs.push(spans);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.para(vec![plain(text)])
    }
}

/// Serbian on the left, English on the right, kept on one table row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClausePair {
    pub serbian: ClauseText,
    pub english: ClauseText,
}

impl ClausePair {
    pub fn new(serbian: ClauseText, english: ClauseText) -> Self {
        Self { serbian, english }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

pub fn field(label: impl Into<String>, value: impl Into<String>) -> Field {
    Field {
        label: label.into(),
        value: value.into(),
    }
}

/// Role caption, signature line, bold name and an optional gray sub-caption.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureBlock {
    pub role: String,
    pub name: String,
    pub sub_caption: Option<String>,
    /// Fraction of the column width covered by the signature line.
    pub rule: f64,
}

impl SignatureBlock {
    pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            sub_caption: None,
            rule: 0.7,
        }
    }

    pub fn sub_caption(mut self, caption: impl Into<String>) -> Self {
        self.sub_caption = Some(caption.into());
        self
    }

    pub fn rule(mut self, ratio: f64) -> Self {
        self.rule = ratio;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    /// Small gray centered line.
    Caption(String),
    Paragraph { spans: Vec<Span>, align: Align },
    /// Vertical space measured in lines.
    Gap(f64),
    PageBreak,
    /// Bilingual rows separated by a vertical divider.
    Clauses(Vec<ClausePair>),
    /// Two columns without a divider, used for place and date lines.
    SideBySide(ClausePair),
    Fields(Vec<Field>),
    Framed(Vec<Block>),
    Signature(SignatureBlock),
    SignaturePair(SignatureBlock, SignatureBlock),
}

impl Block {
    pub fn paragraph(spans: Vec<Span>) -> Self {
        Block::Paragraph {
            spans,
            align: Align::Left,
        }
    }

    pub fn centered(spans: Vec<Span>) -> Self {
        Block::Paragraph {
            spans,
            align: Align::Center,
        }
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Block::Title(text) | Block::Caption(text) => out.push(text.clone()),
            Block::Paragraph { spans, .. } => out.push(joined(spans)),
            Block::Gap(_) | Block::PageBreak => {}
            Block::Clauses(pairs) => {
                for pair in pairs {
                    pair.collect_text(out);
                }
            }
            Block::SideBySide(pair) => pair.collect_text(out),
            Block::Fields(fields) => {
                out.extend(
                    fields
                        .iter()
                        .map(|entry| format!("{} {}", entry.label, entry.value)),
                );
            }
            Block::Framed(blocks) => {
                for block in blocks {
                    block.collect_text(out);
                }
            }
            Block::Signature(block) => block.collect_text(out),
            Block::SignaturePair(left, right) => {
                left.collect_text(out);
                right.collect_text(out);
            }
        }
    }
}

impl ClausePair {
    fn collect_text(&self, out: &mut Vec<String>) {
        for side in [&self.serbian, &self.english] {
            out.extend(side.heading.clone());
            out.extend(side.paragraphs.iter().map(|spans| joined(spans)));
        }
    }
}

impl SignatureBlock {
    fn collect_text(&self, out: &mut Vec<String>) {
        out.push(self.role.clone());
        out.push(self.name.clone());
        out.extend(self.sub_caption.clone());
    }
}

fn joined(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub font_size: u8,
    /// Page margins in millimetres, top/right/bottom/left.
    pub margins: (f64, f64, f64, f64),
    pub line_spacing: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            font_size: 10,
            margins: (14.0, 14.0, 14.0, 14.0),
            line_spacing: 1.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub title: String,
    pub setup: PageSetup,
    pub blocks: Vec<Block>,
}

impl Sheet {
    pub fn new(title: impl Into<String>, setup: PageSetup) -> Self {
        Self {
            title: title.into(),
            setup,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// Every piece of visible text in reading order, one entry per paragraph.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for block in &self.blocks {
            block.collect_text(&mut out);
        }
        out
    }

    pub fn page_breaks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::PageBreak))
            .count()
    }
}

/// Lays out the sheet on A4 and returns the finished PDF bytes.
pub fn compose(sheet: Sheet, fonts: &FontSet) -> Result<Vec<u8>, Error> {
    let setup = sheet.setup;
    let (top, right, bottom, left) = setup.margins;

    let mut document = Document::new(fonts.family());
    document.set_title(sheet.title);
    document.set_minimal_conformance();
    document.set_paper_size(PaperSize::A4);
    document.set_font_size(setup.font_size);
    document.set_line_spacing(setup.line_spacing);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(top, right, bottom, left));
    document.set_page_decorator(decorator);

    let styles = Styles::new(setup.font_size);
    for block in sheet.blocks {
        put_block(&mut document, block, &styles)?;
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}

/// Something elements can be appended to: the document itself or a nested layout.
trait Sink {
    fn put<E: Element + 'static>(&mut self, element: E);
}

impl Sink for Document {
    fn put<E: Element + 'static>(&mut self, element: E) {
        self.push(element);
    }
}

impl Sink for LinearLayout {
    fn put<E: Element + 'static>(&mut self, element: E) {
        self.push(element);
    }
}

struct Styles {
    body: Style,
    title: Style,
    heading: Style,
    small: Style,
}

impl Styles {
    fn new(font_size: u8) -> Self {
        Self {
            body: Style::new(),
            title: Style::new().bold().with_font_size(font_size.saturating_add(3)),
            heading: Style::new().bold().with_font_size(font_size.saturating_add(1)),
            small: Style::new()
                .with_font_size(font_size.saturating_sub(2).max(6))
                .with_color(MUTED),
        }
    }
}

fn paragraph(spans: &[Span], align: Align, base: Style) -> FittedParagraph {
    let mut paragraph = FittedParagraph::new(align.alignment());
    for span in spans {
        let style = if span.bold { base.bold() } else { base };
        paragraph.push(span.text.clone(), style);
    }
    paragraph
}

fn clause_column(clause: ClauseText, styles: &Styles) -> LinearLayout {
    let mut column = LinearLayout::vertical();
    if let Some(heading) = clause.heading {
        column.push(
            paragraph(&[plain(heading)], Align::Center, styles.heading)
                .padded(Margins::trbl(0.0, 0.0, 1.5, 0.0)),
        );
    }
    for spans in clause.paragraphs {
        column.push(
            paragraph(&spans, Align::Left, styles.body).padded(Margins::trbl(0.0, 0.0, 1.0, 0.0)),
        );
    }
    column
}

fn signature(block: SignatureBlock, styles: &Styles) -> LinearLayout {
    let mut column = LinearLayout::vertical();
    column.push(paragraph(&[plain(block.role)], Align::Center, styles.small));
    column.push(Break::new(2.5));
    column.push(Rule::new(block.rule));
    column.push(paragraph(&[bold(block.name)], Align::Center, styles.body));
    if let Some(caption) = block.sub_caption {
        column.push(paragraph(&[plain(caption)], Align::Center, styles.small));
    }
    column
}

fn two_columns(
    left: impl Element + 'static,
    right: impl Element + 'static,
    divided: bool,
) -> Result<TableLayout, Error> {
    let mut table = TableLayout::new(vec![1, 1]);
    if divided {
        table.set_cell_decorator(ColumnDivider::default());
    }
    table
        .row()
        .element(left.padded(Margins::trbl(1.0, 3.0, 1.0, 0.0)))
        .element(right.padded(Margins::trbl(1.0, 0.0, 1.0, 3.0)))
        .push()?;
    Ok(table)
}

fn put_block<S: Sink>(sink: &mut S, block: Block, styles: &Styles) -> Result<(), Error> {
    match block {
        Block::Title(text) => sink.put(
            paragraph(&[plain(text)], Align::Center, styles.title)
                .padded(Margins::trbl(0.0, 0.0, 4.0, 0.0)),
        ),
        Block::Caption(text) => sink.put(paragraph(&[plain(text)], Align::Center, styles.small)),
        Block::Paragraph { spans, align } => sink.put(
            paragraph(&spans, align, styles.body).padded(Margins::trbl(0.0, 0.0, 2.0, 0.0)),
        ),
        Block::Gap(lines) => sink.put(Break::new(lines)),
        Block::PageBreak => sink.put(PageBreak::new()),
        Block::Clauses(pairs) => {
            for pair in pairs {
                sink.put(two_columns(
                    clause_column(pair.serbian, styles),
                    clause_column(pair.english, styles),
                    true,
                )?);
            }
        }
        Block::SideBySide(pair) => sink.put(two_columns(
            clause_column(pair.serbian, styles),
            clause_column(pair.english, styles),
            false,
        )?),
        Block::Fields(fields) => {
            let mut table = TableLayout::new(vec![5, 6]);
            for entry in fields {
                table
                    .row()
                    .element(paragraph(&[plain(entry.label)], Align::Left, styles.body))
                    .element(paragraph(&[bold(entry.value)], Align::Left, styles.body))
                    .push()?;
            }
            sink.put(table.padded(Margins::trbl(1.0, 0.0, 3.0, 3.0)));
        }
        Block::Framed(blocks) => {
            let mut inner = LinearLayout::vertical();
            for nested in blocks {
                put_block(&mut inner, nested, styles)?;
            }
            let mut frame = TableLayout::new(vec![1]);
            frame.set_cell_decorator(FrameCellDecorator::new(false, true, false));
            frame
                .row()
                .element(inner.padded(Margins::all(2.5)))
                .push()?;
            sink.put(frame.padded(Margins::trbl(0.0, 0.0, 3.0, 0.0)));
        }
        Block::Signature(block) => sink.put(
            signature(block, styles).padded(Margins::trbl(4.0, 0.0, 0.0, 0.0)),
        ),
        Block::SignaturePair(left, right) => {
            let mut table = TableLayout::new(vec![1, 1]);
            table
                .row()
                .element(signature(left, styles).padded(Margins::trbl(0.0, 6.0, 0.0, 0.0)))
                .element(signature(right, styles).padded(Margins::trbl(0.0, 0.0, 0.0, 6.0)))
                .push()?;
            sink.put(table.padded(Margins::trbl(6.0, 0.0, 0.0, 0.0)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_flatten_text_in_reading_order() {
        let mut sheet = Sheet::new("Demo", PageSetup::default());
        sheet
            .push(Block::Title("NASLOV / TITLE".to_string()))
            .push(Block::paragraph(vec![bold("POSLODAVAC:"), plain(" Firma DOO")]))
            .push(Block::PageBreak)
            .push(Block::Clauses(vec![ClausePair::new(
                ClauseText::headed("Član 1").text("Tekst"),
                ClauseText::headed("Article 1").text("Text"),
            )]))
            .push(Block::Signature(
                SignatureBlock::new("Zaposleni / Employee", "Ram").sub_caption("(potpis)"),
            ));

        assert_eq!(
            sheet.lines(),
            vec![
                "NASLOV / TITLE",
                "POSLODAVAC: Firma DOO",
                "Član 1",
                "Tekst",
                "Article 1",
                "Text",
                "Zaposleni / Employee",
                "Ram",
                "(potpis)",
            ]
        );
        assert_eq!(sheet.page_breaks(), 1);
    }

    #[test]
    fn framed_blocks_contribute_their_text() {
        let mut sheet = Sheet::new("Frame", PageSetup::default());
        sheet.push(Block::Framed(vec![
            Block::Caption("header".to_string()),
            Block::Fields(vec![field("ИМЕ / NAME", "Ram")]),
        ]));

        assert_eq!(sheet.lines(), vec!["header", "ИМЕ / NAME Ram"]);
    }
}
