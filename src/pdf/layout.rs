use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point,
};

use crate::errors::InternalError;

pub const PAGE_WIDTH: f32 = 216.0;
pub const PAGE_HEIGHT: f32 = 279.0;
pub const MARGIN: f32 = 15.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 0.3528;
const LAYER: &str = "Layer 1";

/// Fold text to the characters the built-in Helvetica encoding can draw
pub fn fold_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Á' | 'À' | 'Ä' | 'Â' => 'A',
            'É' | 'È' | 'Ë' | 'Ê' => 'E',
            'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
            'Ó' | 'Ò' | 'Ö' | 'Ô' => 'O',
            'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
            'ñ' => 'n',
            'Ñ' => 'N',
            'ç' => 'c',
            'Ç' => 'C',
            '\n' | '\r' | '\t' => ' ',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}

/// Cut `text` to `max` characters, ending in "..." when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Greedy word wrap to lines of at most `max_chars`
///
/// Words longer than a line are split.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: String = word.to_string();
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let head: String = word.chars().take(max_chars).collect();
                word = word.chars().skip(max_chars).collect();
                lines.push(head);
            }
            if word.is_empty() {
                continue;
            }
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Approximate Helvetica advance width of `text` in millimetres
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let factor = if bold { 0.56 } else { 0.52 };
    text.chars().count() as f32 * size * factor * PT_TO_MM
}

/// Drawing surface over a printpdf document
///
/// Coordinates are millimetres from the top-left corner of the page; `y` grows
/// downwards and is converted to PDF space on every call. The lowest point drawn
/// on each page is tracked so callers can check what still fits.
pub struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    bottoms: Vec<f32>,
    current: usize,
}

impl Canvas {
    pub fn new(title: &str) -> Result<Self, InternalError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| InternalError::render("pdf_font", e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| InternalError::render("pdf_font", e.to_string()))?;
        let current = doc.get_page(page).get_layer(layer);
        current.set_outline_thickness(0.3);

        Ok(Self {
            doc,
            layer: current,
            regular,
            bold,
            pages: vec![(page, layer)],
            bottoms: vec![0.0],
            current: 0,
        })
    }

    /// Start a new page; later drawing goes to it
    pub fn add_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
        self.pages.push((page, layer));
        self.bottoms.push(0.0);
        self.select_page(self.pages.len() - 1);
    }

    /// Send later drawing to an existing page
    pub fn select_page(&mut self, index: usize) {
        if let Some(&(page, layer)) = self.pages.get(index) {
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.layer.set_outline_thickness(0.3);
            self.current = index;
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lowest `y` drawn so far on each page
    pub fn bottoms(&self) -> &[f32] {
        &self.bottoms
    }

    fn mark(&mut self, y: f32) {
        if let Some(bottom) = self.bottoms.get_mut(self.current) {
            *bottom = bottom.max(y);
        }
    }

    /// Draw text with its top edge at `y`
    pub fn text(&mut self, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { &self.bold } else { &self.regular };
        let baseline = y + size * PT_TO_MM * 0.8;
        self.layer.use_text(
            fold_ascii(text),
            size,
            Mm(x),
            Mm(PAGE_HEIGHT - baseline),
            font,
        );
        self.mark(y + size * PT_TO_MM);
    }

    /// Text centered horizontally inside [x, x + width]
    pub fn text_centered(&mut self, x: f32, width: f32, y: f32, size: f32, bold: bool, text: &str) {
        let folded = fold_ascii(text);
        let offset = ((width - text_width(&folded, size, bold)) / 2.0).max(0.0);
        self.text(x + offset, y, size, bold, &folded);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(PAGE_HEIGHT - y1)), false),
                (Point::new(Mm(x2), Mm(PAGE_HEIGHT - y2)), false),
            ],
            is_closed: false,
        });
        self.mark(y1.max(y2));
    }

    /// Outline of a rectangle whose top-left corner is (x, y)
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let top = PAGE_HEIGHT - y;
        let bottom = PAGE_HEIGHT - y - height;
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(top)), false),
                (Point::new(Mm(x + width), Mm(bottom)), false),
                (Point::new(Mm(x), Mm(bottom)), false),
            ],
            is_closed: true,
        });
        self.mark(y + height);
    }

    /// A square box, crossed when checked
    pub fn checkbox(&mut self, x: f32, y: f32, size: f32, checked: bool) {
        self.rect(x, y, size, size);
        if checked {
            self.line(x, y, x + size, y + size);
            self.line(x + size, y, x, y + size);
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, InternalError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| InternalError::render("pdf_save", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold_ascii("Nariño – Oficina Técnica"), "Narino ? Oficina Tecnica");
        assert_eq!(fold_ascii("ÁÉÍÓÚ ü"), "AEIOU u");
        assert_eq!(fold_ascii("linea\nnueva"), "linea nueva");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 55), "corto");
        let long = "x".repeat(60);
        let cut = truncate(&long, 55);
        assert_eq!(cut.chars().count(), 55);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("el equipo no enciende y presenta pitidos al arrancar", 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(
            lines.join(" "),
            "el equipo no enciende y presenta pitidos al arrancar"
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap(&"a".repeat(25), 10);
        assert_eq!(lines, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        assert_eq!(wrap("uno\ndos", 50), vec!["uno".to_string(), "dos".to_string()]);
        assert!(wrap("", 50).is_empty());
    }

    #[test]
    fn test_canvas_produces_pdf_bytes() {
        let mut canvas = Canvas::new("prueba").unwrap();
        canvas.text(MARGIN, MARGIN, 10.0, true, "Página uno");
        canvas.rect(MARGIN, 30.0, CONTENT_WIDTH, 10.0);
        canvas.add_page();
        canvas.checkbox(MARGIN, 40.0, 4.0, true);

        let bytes = canvas.into_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_canvas_tracks_lowest_point_per_page() {
        let mut canvas = Canvas::new("paginas").unwrap();
        canvas.rect(MARGIN, 20.0, CONTENT_WIDTH, 30.0);
        canvas.text(MARGIN, 10.0, 10.0, false, "arriba");
        canvas.add_page();
        canvas.line(MARGIN, 40.0, MARGIN + 10.0, 70.0);

        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.bottoms(), &[50.0, 70.0]);

        canvas.select_page(0);
        canvas.rect(MARGIN, 100.0, 10.0, 5.0);
        assert_eq!(canvas.bottoms(), &[105.0, 70.0]);
    }
}
