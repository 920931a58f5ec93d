//! Page-label number tree.
//!
//! A PDF catalog may carry a `/PageLabels` number tree mapping the index of
//! the first page of each labelling range to a range dictionary:
//!
//! - `/S` numbering style (`D`, `R`, `r`, `A`, `a`), absent for prefix-only
//! - `/P` label prefix
//! - `/St` value of the numeric part on the first page of the range
//!
//! The tree is flattened into an ordered map once per document.

use lopdf::{Dictionary, Document, Object};
use std::collections::{BTreeMap, HashSet};

use crate::error::{LabelCatError, Result};
use crate::io::LoadedPdf;

/// Kids recursion limit; real documents use two or three levels.
const MAX_TREE_DEPTH: usize = 32;

/// Largest value written as a roman numeral; larger values print in decimal.
const MAX_ROMAN: i64 = 3999;

/// Largest value written in letters (100 repeated letters); larger values
/// print in decimal.
const MAX_LETTERS: i64 = 26 * 100;

/// Numbering style of a label range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingStyle {
    /// `1, 2, 3`
    Decimal,
    /// `I, II, III`
    UpperRoman,
    /// `i, ii, iii`
    LowerRoman,
    /// `A .. Z, AA .. ZZ`
    UpperLetters,
    /// `a .. z, aa .. zz`
    LowerLetters,
}

impl NumberingStyle {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"D" => Some(Self::Decimal),
            b"R" => Some(Self::UpperRoman),
            b"r" => Some(Self::LowerRoman),
            b"A" => Some(Self::UpperLetters),
            b"a" => Some(Self::LowerLetters),
            _ => None,
        }
    }

    /// Render `value` in this style.
    pub fn format(&self, value: i64) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::UpperRoman => to_roman(value),
            Self::LowerRoman => to_roman(value).to_lowercase(),
            Self::UpperLetters => to_letters(value),
            Self::LowerLetters => to_letters(value).to_lowercase(),
        }
    }
}

/// One labelling range, starting at some page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRange {
    /// Numbering style; `None` means the label is the prefix alone.
    pub style: Option<NumberingStyle>,
    /// Prefix prepended to every label in the range.
    pub prefix: String,
    /// Numeric value of the range's first page.
    pub start: i64,
}

impl Default for LabelRange {
    /// The range assumed for pages no entry covers.
    fn default() -> Self {
        Self {
            style: Some(NumberingStyle::Decimal),
            prefix: String::new(),
            start: 1,
        }
    }
}

impl LabelRange {
    fn from_dictionary(dict: &Dictionary) -> Self {
        let style = dict
            .get(b"S")
            .and_then(Object::as_name)
            .ok()
            .and_then(NumberingStyle::from_name);

        let prefix = dict
            .get(b"P")
            .ok()
            .and_then(|prefix| lopdf::decode_text_string(prefix).ok())
            .unwrap_or_default();

        let start = dict.get(b"St").and_then(Object::as_i64).unwrap_or(1);

        Self {
            style,
            prefix,
            start,
        }
    }

    /// Label of the page `offset` pages into this range.
    ///
    /// `None` if the page's numeric value overflows.
    pub fn label_at(&self, offset: i64) -> Option<String> {
        match self.style {
            Some(style) => {
                let value = self.start.checked_add(offset)?;
                Some(format!("{}{}", self.prefix, style.format(value)))
            }
            None => Some(self.prefix.clone()),
        }
    }
}

/// Flattened `/PageLabels` tree of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLabels {
    ranges: BTreeMap<i64, LabelRange>,
}

impl PageLabels {
    /// Read the page-label tree of `doc`.
    ///
    /// Returns `Ok(None)` when the catalog has no `/PageLabels` entry.
    ///
    /// # Errors
    ///
    /// Returns an error message when the catalog is missing or the tree is
    /// structurally broken. The caller attaches the file path.
    pub fn from_document(doc: &Document) -> std::result::Result<Option<Self>, String> {
        let catalog = doc
            .catalog()
            .map_err(|e| format!("cannot read document catalog: {e}"))?;

        let root = match catalog.get(b"PageLabels") {
            Ok(object) => object,
            Err(_) => return Ok(None),
        };

        let mut labels = Self::default();
        let mut visited = HashSet::new();
        labels.collect_node(doc, root, 0, &mut visited)?;
        Ok(Some(labels))
    }

    fn collect_node(
        &mut self,
        doc: &Document,
        node: &Object,
        depth: usize,
        visited: &mut HashSet<lopdf::ObjectId>,
    ) -> std::result::Result<(), String> {
        if depth > MAX_TREE_DEPTH {
            return Err("page label tree is too deep".to_string());
        }

        if let Object::Reference(id) = node
            && !visited.insert(*id)
        {
            return Err(format!("page label tree has a cycle at {} {} R", id.0, id.1));
        }

        let dict = resolve(doc, node)?
            .as_dict()
            .map_err(|_| "page label tree node is not a dictionary".to_string())?;

        if let Ok(nums) = dict.get(b"Nums") {
            let nums = resolve(doc, nums)?
                .as_array()
                .map_err(|_| "/Nums is not an array".to_string())?;

            for pair in nums.chunks(2) {
                let [key, value] = pair else {
                    return Err("/Nums has an odd number of entries".to_string());
                };
                let index = resolve(doc, key)?
                    .as_i64()
                    .map_err(|_| "/Nums key is not an integer".to_string())?;
                let range = resolve(doc, value)?
                    .as_dict()
                    .map_err(|_| "/Nums value is not a dictionary".to_string())?;
                self.ranges.insert(index, LabelRange::from_dictionary(range));
            }
        }

        if let Ok(kids) = dict.get(b"Kids") {
            let kids = resolve(doc, kids)?
                .as_array()
                .map_err(|_| "/Kids is not an array".to_string())?;

            for kid in kids {
                self.collect_node(doc, kid, depth + 1, visited)?;
            }
        }

        Ok(())
    }

    /// Label printed on the page at zero-based `index`.
    ///
    /// The range with the greatest start not after `index` applies; pages
    /// before every range use the default decimal range.
    ///
    /// `None` if the range arithmetic overflows.
    pub fn label_for_index(&self, index: i64) -> Option<String> {
        match self.ranges.range(..=index).next_back() {
            Some((&first, range)) => range.label_at(index.checked_sub(first)?),
            None => LabelRange::default().label_at(index),
        }
    }

    /// Label of the first page.
    pub fn first_label(&self) -> Option<String> {
        self.label_for_index(0)
    }

    /// Number of ranges in the tree.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the tree has no ranges at all.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Read the first-page label of a loaded document.
///
/// `Ok(None)` means the document carries no page-label metadata.
///
/// # Errors
///
/// Returns [`LabelCatError::CorruptedPdf`] if the tree is broken or its
/// numbers overflow.
pub fn first_page_label(pdf: &LoadedPdf) -> Result<Option<String>> {
    let Some(labels) = PageLabels::from_document(&pdf.document)
        .map_err(|details| LabelCatError::corrupted_pdf(pdf.path.clone(), details))?
    else {
        return Ok(None);
    };

    labels.first_label().map(Some).ok_or_else(|| {
        LabelCatError::corrupted_pdf(pdf.path.clone(), "page label value overflows")
    })
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> std::result::Result<&'a Object, String> {
    match object {
        Object::Reference(id) => doc
            .get_object(*id)
            .map_err(|e| format!("dangling reference {} {} R: {e}", id.0, id.1)),
        other => Ok(other),
    }
}

fn to_roman(mut value: i64) -> String {
    const NUMERALS: [(i64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if !(1..=MAX_ROMAN).contains(&value) {
        return value.to_string();
    }

    let mut out = String::new();
    for (weight, numeral) in NUMERALS {
        while value >= weight {
            out.push_str(numeral);
            value -= weight;
        }
    }
    out
}

/// `1 -> A`, `26 -> Z`, `27 -> AA`, `52 -> ZZ`, `53 -> AAA`.
fn to_letters(value: i64) -> String {
    if !(1..=MAX_LETTERS).contains(&value) {
        return value.to_string();
    }

    let letter = (b'A' + ((value - 1) % 26) as u8) as char;
    let repeat = ((value - 1) / 26 + 1) as usize;
    std::iter::repeat_n(letter, repeat).collect()
}
