use crate::document::EquationForm;

/// An equation cut out of block text, waiting to be transcoded and spliced
/// back in by the document assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationPlaceholder {
    /// Position in the side table; equals the order of appearance.
    pub id: usize,
    pub form: EquationForm,
    /// Source between the delimiters, untouched.
    pub source: String,
    /// Byte offset of this equation's marker in [`Extracted::text`].
    pub at: usize,
}

impl EquationPlaceholder {
    /// Opaque stand-in written into the rewritten text.
    ///
    /// Splicing goes by [`EquationPlaceholder::at`], never by searching for
    /// this character, so the same character in user text stays text.
    pub const MARKER: char = '\u{FFFC}';

    /// The equation as it was written, delimiters included.
    pub fn delimited_source(&self) -> String {
        let delim = self.form.delimiter();
        format!("{delim}{}{delim}", self.source)
    }
}

/// Block text with equations replaced by markers, plus the side table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub equations: Vec<EquationPlaceholder>,
}

impl Extracted {
    /// Wraps text that has no equations (used when equations are disabled).
    pub fn verbatim(text: &str) -> Self {
        Self {
            text: text.to_string(),
            equations: vec![],
        }
    }
}

const BLOCK_DELIM: &str = "$$";
const INLINE_DELIM: char = '$';

/// A resolved `[start, end)` region of the original text, delimiters included.
#[derive(Debug, Clone, Copy)]
struct Region {
    start: usize,
    end: usize,
    form: EquationForm,
}

impl Region {
    fn source<'a>(&self, text: &'a str) -> &'a str {
        let delim = self.form.delimiter().len();
        &text[self.start + delim..self.end - delim]
    }
}

/// Finds `$$...$$` and `$...$` regions and swaps each for a marker.
///
/// All block regions are resolved first, leftmost-first. Inline regions are
/// then resolved inside the gaps between them. An unmatched `$$` stays
/// literal and ends equation scanning for the rest of the text; an unmatched
/// `$` stays literal and ends inline scanning for the rest of its gap.
pub fn extract_equations(text: &str) -> Extracted {
    let (blocks, limit) = block_regions(text);

    let mut regions = Vec::with_capacity(blocks.len());
    let mut gap_start = 0;
    for block in blocks {
        inline_regions(text, gap_start, block.start, &mut regions);
        regions.push(block);
        gap_start = block.end;
    }
    inline_regions(text, gap_start, limit, &mut regions);

    let mut out = String::with_capacity(text.len());
    let mut equations = Vec::with_capacity(regions.len());
    let mut copied = 0;
    for (id, region) in regions.iter().enumerate() {
        out.push_str(&text[copied..region.start]);
        equations.push(EquationPlaceholder {
            id,
            form: region.form,
            source: region.source(text).to_string(),
            at: out.len(),
        });
        out.push(EquationPlaceholder::MARKER);
        copied = region.end;
    }
    out.push_str(&text[copied..]);

    Extracted {
        text: out,
        equations,
    }
}

/// Resolves block regions and returns them with the offset where scanning
/// stopped (the start of an unmatched `$$`, or the end of the text).
fn block_regions(text: &str) -> (Vec<Region>, usize) {
    let mut regions = vec![];
    let mut pos = 0;
    while let Some(off) = text[pos..].find(BLOCK_DELIM) {
        let start = pos + off;
        let content_start = start + BLOCK_DELIM.len();
        let Some(close) = text[content_start..].find(BLOCK_DELIM) else {
            log::debug!("unmatched `$$` at byte {start}; leaving the rest as text");
            return (regions, start);
        };
        let end = content_start + close + BLOCK_DELIM.len();
        regions.push(Region {
            start,
            end,
            form: EquationForm::Block,
        });
        pos = end;
    }
    (regions, text.len())
}

fn inline_regions(text: &str, from: usize, to: usize, out: &mut Vec<Region>) {
    let mut pos = from;
    while let Some(off) = text[pos..to].find(INLINE_DELIM) {
        let start = pos + off;
        let content_start = start + INLINE_DELIM.len_utf8();
        let Some(close) = text[content_start..to].find(INLINE_DELIM) else {
            log::debug!("unmatched `$` at byte {start}; leaving it as text");
            return;
        };
        let end = content_start + close + INLINE_DELIM.len_utf8();
        out.push(Region {
            start,
            end,
            form: EquationForm::Inline,
        });
        pos = end;
    }
}
