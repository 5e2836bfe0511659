//! Fixed-layout invoice document
//!
//! The document is built in two steps: [`InvoiceLayout::build`] places every
//! cell on a page in millimetres (measured from the top-left corner), then
//! [`render_pdf`] draws the cells with `printpdf` builtin Helvetica fonts.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point};
use serde::Deserialize;
use thiserror::Error;

use super::product::format_amount;
use super::session::Invoice;

/// Left and top page margin
pub const PAGE_MARGIN: f32 = 10.0;
/// Rows never start below this distance from the bottom edge
pub const BREAK_MARGIN: f32 = 20.0;
pub const ROW_HEIGHT: f32 = 10.0;
/// Width of the borderless customer line
pub const HEADER_WIDTH: f32 = 200.0;
/// Vertical gap between the customer line and the table
pub const HEADER_GAP: f32 = 5.0;
/// Horizontal text inset inside a cell
pub const CELL_PADDING: f32 = 1.0;
pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

/// Table columns: heading and width in mm
pub const COLUMNS: [(&str, f32); 4] = [
    ("Product Name", 50.0),
    ("Weight", 50.0),
    ("Price", 40.0),
    ("Total", 40.0),
];

const PT_TO_MM: f32 = 25.4 / 72.0;
/// Average Helvetica glyph advance as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;
const LINE_WIDTH_PT: f32 = 0.567;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("failed to load font: {0}")]
    Font(String),
    #[error("failed to serialize document: {0}")]
    Save(String),
    #[error("'{0}' contains characters the built-in PDF font cannot print")]
    UnsupportedText(String),
}

/// Supported paper sizes
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Paper {
    #[default]
    A4,
    Letter,
}

impl Paper {
    /// Width and height in mm, portrait
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            Paper::A4 => (210.0, 297.0),
            Paper::Letter => (215.9, 279.4),
        }
    }
}

/// Page geometry and typography for the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub paper: Paper,
    pub font_size: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper: Paper::A4,
            font_size: 12.0,
        }
    }
}

impl PageSetup {
    pub fn with_paper(mut self, paper: Paper) -> Self {
        self.paper = paper;
        self
    }

    fn font_size_mm(&self) -> f32 {
        self.font_size * PT_TO_MM
    }
}

/// A positioned piece of text, optionally framed
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f32,
    /// Top edge, measured from the top of the page
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    pub bold: bool,
    pub border: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub cells: Vec<Cell>,
}

/// Every cell of the invoice, page by page
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<LayoutPage>,
}

/// Cursor used while placing cells
struct LayoutCursor {
    setup: PageSetup,
    page_height: f32,
    pages: Vec<LayoutPage>,
    x: f32,
    y: f32,
}

impl LayoutCursor {
    fn new(setup: PageSetup) -> Self {
        let (_, page_height) = setup.paper.dimensions();
        Self {
            setup,
            page_height,
            pages: vec![LayoutPage::default()],
            x: PAGE_MARGIN,
            y: PAGE_MARGIN,
        }
    }

    /// Start a new page when a row of `height` would cross the break margin
    fn ensure_room(&mut self, height: f32) {
        let at_top = self.y <= PAGE_MARGIN;
        if !at_top && self.y + height > self.page_height - BREAK_MARGIN {
            self.pages.push(LayoutPage::default());
            self.y = PAGE_MARGIN;
        }
    }

    fn cell(&mut self, width: f32, text: &str, bold: bool, border: bool) {
        let text = fit_text(text, width, self.setup.font_size);
        if let Some(page) = self.pages.last_mut() {
            page.cells.push(Cell {
                x: self.x,
                y: self.y,
                width,
                height: ROW_HEIGHT,
                text,
                bold,
                border,
            });
        }
        self.x += width;
    }

    /// Place a full row of bordered cells
    fn row(&mut self, cells: &[(&str, f32)], bold: bool) {
        self.ensure_room(ROW_HEIGHT);
        for (text, width) in cells {
            self.cell(*width, text, bold, true);
        }
        self.line_break(ROW_HEIGHT);
    }

    fn line_break(&mut self, height: f32) {
        self.x = PAGE_MARGIN;
        self.y += height;
    }
}

impl InvoiceLayout {
    /// Place the customer line, table header, product rows, and totals row
    pub fn build(invoice: &Invoice, setup: &PageSetup) -> Self {
        let (page_width, page_height) = setup.paper.dimensions();
        let mut cursor = LayoutCursor::new(*setup);

        cursor.cell(
            HEADER_WIDTH,
            &format!("Name: {}", invoice.customer),
            false,
            false,
        );
        cursor.line_break(ROW_HEIGHT);
        cursor.line_break(HEADER_GAP);

        cursor.row(&COLUMNS, true);

        for product in &invoice.products {
            let price = format_amount(product.price);
            let total = format_amount(product.line_total());
            cursor.row(
                &[
                    (product.name.as_str(), COLUMNS[0].1),
                    (product.weight.as_str(), COLUMNS[1].1),
                    (price.as_str(), COLUMNS[2].1),
                    (total.as_str(), COLUMNS[3].1),
                ],
                false,
            );
        }

        let label_width = COLUMNS[0].1 + COLUMNS[1].1 + COLUMNS[2].1;
        let grand_total = format_amount(invoice.grand_total);
        cursor.row(
            &[
                (GRAND_TOTAL_LABEL, label_width),
                (grand_total.as_str(), COLUMNS[3].1),
            ],
            true,
        );

        Self {
            page_width,
            page_height,
            pages: cursor.pages,
        }
    }

    /// All cells across pages, in drawing order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.pages.iter().flat_map(|page| page.cells.iter())
    }
}

/// Truncate `text` with "..." when it would overflow a cell of `width` mm.
///
/// Builtin PDF fonts carry no metrics here, so glyph width is estimated.
pub fn fit_text(text: &str, width: f32, font_size: f32) -> String {
    let glyph_width = font_size * PT_TO_MM * AVG_GLYPH_WIDTH;
    let usable = (width - 2.0 * CELL_PADDING).max(0.0);
    let max_chars = (usable / glyph_width).floor() as usize;

    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut fitted: String = text.chars().take(max_chars - 3).collect();
    fitted.push_str("...");
    fitted
}

/// Characters of the 0x80..=0x9F block of Windows-1252
const WINANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Whether builtin Type1 fonts can draw `c` (WinAnsi encoding)
pub fn is_winansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WINANSI_EXTRAS.contains(c)
}

/// Render the invoice to PDF bytes.
///
/// Text outside WinAnsi would be dropped by the builtin fonts, so it is
/// rejected before anything is drawn.
pub fn render_pdf(invoice: &Invoice, setup: &PageSetup) -> Result<Vec<u8>, PdfError> {
    let layout = InvoiceLayout::build(invoice, setup);
    if let Some(cell) = layout.cells().find(|c| !c.text.chars().all(is_winansi)) {
        return Err(PdfError::UnsupportedText(cell.text.clone()));
    }
    let width = Mm(layout.page_width);
    let height = Mm(layout.page_height);

    let (doc, first_page, first_layer) = PdfDocument::new("Invoice", width, height, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError::Font(e.to_string()))?;

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        layer.set_outline_thickness(LINE_WIDTH_PT);

        for cell in &page.cells {
            let font = if cell.bold { &bold } else { &regular };
            draw_cell(&layer, font, cell, layout.page_height, setup);
        }
    }

    tracing::debug!(
        pages = layout.pages.len(),
        products = invoice.products.len(),
        "Rendered invoice document"
    );

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| PdfError::Save(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| PdfError::Save(e.to_string()))
}

fn draw_cell(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    cell: &Cell,
    page_height: f32,
    setup: &PageSetup,
) {
    // PDF space grows upwards from the bottom-left corner
    let top = page_height - cell.y;
    let bottom = top - cell.height;

    if cell.border {
        let left = cell.x;
        let right = cell.x + cell.width;
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(left), Mm(top)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(left), Mm(bottom)), false),
            ],
            is_closed: true,
        });
    }

    if !cell.text.is_empty() {
        let baseline = top - cell.height / 2.0 - 0.3 * setup.font_size_mm();
        layer.use_text(
            cell.text.as_str(),
            setup.font_size,
            Mm(cell.x + CELL_PADDING),
            Mm(baseline),
            font,
        );
    }
}
