use genpdf::elements::{CellDecorator, Paragraph};
use genpdf::render::Area;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{error::Error, Alignment, Context, Element, Mm, Position, RenderResult, Size};

pub(crate) const INK: Color = Color::Rgb(0, 0, 0);
pub(crate) const MUTED: Color = Color::Rgb(102, 102, 102);
pub(crate) const HAIRLINE: Color = Color::Rgb(204, 204, 204);

/// Horizontal signature line covering `ratio` of the available width, centered.
pub(crate) struct Rule {
    ratio: f64,
    color: Color,
}

impl Rule {
    const HEIGHT_MM: f64 = 2.0;

    pub(crate) fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.05, 1.0),
            color: INK,
        }
    }
}

impl Element for Rule {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size();
        if available.height < Mm::from(Self::HEIGHT_MM) {
            return Ok(RenderResult {
                has_more: true,
                ..RenderResult::default()
            });
        }

        let length = available.width * self.ratio;
        let start = (available.width - length) / 2.0;
        let baseline = Mm::from(Self::HEIGHT_MM / 2.0);
        area.draw_line(
            vec![
                Position::new(start, baseline),
                Position::new(start + length, baseline),
            ],
            Style::new().with_color(self.color),
        );

        Ok(RenderResult {
            size: Size::new(available.width, Mm::from(Self::HEIGHT_MM)),
            has_more: false,
        })
    }
}

/// Draws a thin vertical rule after every column but the last.
#[derive(Default)]
pub(crate) struct ColumnDivider {
    columns: usize,
}

impl CellDecorator for ColumnDivider {
    fn set_table_size(&mut self, num_columns: usize, _num_rows: usize) {
        self.columns = num_columns;
    }

    fn decorate_cell(
        &mut self,
        column: usize,
        _row: usize,
        _has_more: bool,
        area: Area<'_>,
        _style: Style,
    ) {
        if column + 1 < self.columns {
            let size = area.size();
            area.draw_line(
                vec![
                    Position::new(size.width, Mm::from(0.0)),
                    Position::new(size.width, size.height),
                ],
                Style::new().with_color(HAIRLINE),
            );
        }
    }
}

/// A paragraph whose words always fit its column.
///
/// genpdf stops wrapping at the first word wider than the line and drops the
/// rest of the paragraph, so such words are split at the widest prefix that
/// fits once the column width is known.
pub(crate) struct FittedParagraph {
    spans: Vec<(String, Style)>,
    alignment: Alignment,
    laid_out: Option<Paragraph>,
}

impl FittedParagraph {
    pub(crate) fn new(alignment: Alignment) -> Self {
        Self {
            spans: Vec::new(),
            alignment,
            laid_out: None,
        }
    }

    pub(crate) fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push((text.into(), style));
    }

    fn lay_out(&mut self, context: &Context, width: Mm, base: Style) -> Paragraph {
        let mut paragraph = Paragraph::default();
        for (text, style) in self.spans.drain(..) {
            let mut effective = base;
            effective.merge(style);
            let fitted = fit_words(&text, |chunk| {
                effective.str_width(&context.font_cache, chunk) <= width
            });
            paragraph.push(StyledString::new(fitted, style));
        }
        paragraph.aligned(self.alignment)
    }
}

impl Element for FittedParagraph {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let paragraph = match self.laid_out.take() {
            Some(paragraph) => paragraph,
            None => self.lay_out(context, area.size().width, style),
        };
        let paragraph = self.laid_out.insert(paragraph);
        paragraph.render(context, area, style)
    }
}

/// Rewrites `text` so every space-separated word satisfies `fits`, splitting
/// the ones that do not. Words that already fit are left untouched.
pub(crate) fn fit_words(text: &str, fits: impl Fn(&str) -> bool) -> String {
    text.split(' ')
        .map(|word| {
            if word.is_empty() || fits(word) {
                word.to_string()
            } else {
                break_word(word, &fits).join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn break_word(word: &str, fits: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        // A lone character is kept even if it is wider than the line.
        if current.chars().count() > 1 && !fits(&current) {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
