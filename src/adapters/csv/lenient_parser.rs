//! Lenient CSV parser adapter.
//!
//! Reads hand-written payoff tables: comma or semicolon delimiters, optional
//! label cells, decimal commas, and explanatory prose around the table.
//! Never fails; unreadable input yields an empty or partially filled table.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::domain::analysis::{PayoffTable, PayoffTableBuilder, State};
use crate::ports::PayoffTableParser;

/// Splits a line into cells on ',' or ';', swallowing surrounding whitespace.
static CELL_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[,;]\s*").expect("cell separator regex"));

/// Placeholder and help lines that contain commas but are not a header.
static EXPLANATORY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)example|csv format|header row|then two rows").expect("explanatory regex")
});

/// Backslash runs, which separate names within a header cell.
static BACKSLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\+").expect("backslash regex"));

/// Leading header cell that labels the axes instead of naming an alternative.
static LABEL_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)outcome|alternativ").expect("label cell regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9+\-eE.]").expect("non-numeric regex"));

/// Outcome rows read after the header: one per state of nature.
const OUTCOME_ROWS: [State; 2] = [State::First, State::Second];

/// Lenient implementation of PayoffTableParser.
///
/// # Layout
///
/// ```text
/// outcomes\alternatives, StatusQuo, Expansion, Collaboration
/// first,                 10,        20,        30
/// second,                5,         25,        15
/// ```
///
/// The corner cell and the row labels are optional.
#[derive(Debug, Clone, Default)]
pub struct LenientCsvParser;

impl LenientCsvParser {
    /// Creates a new lenient parser.
    pub fn new() -> Self {
        Self
    }

    fn split_cells(line: &str) -> Vec<&str> {
        CELL_SEPARATOR.split(line).map(str::trim).collect()
    }

    /// Index of the header line among `lines`, if any line qualifies.
    ///
    /// The first line whose later cells contain a letter wins; otherwise the
    /// first line with at least two cells.
    fn find_header(lines: &[&str]) -> Option<usize> {
        let mut fallback = None;

        for (index, line) in lines.iter().enumerate() {
            let cells = Self::split_cells(line);
            if cells.len() < 2 {
                continue;
            }
            if EXPLANATORY_LINE.is_match(line) {
                continue;
            }

            let names_present = cells[1..]
                .iter()
                .any(|cell| cell.chars().any(char::is_alphabetic));
            if names_present {
                return Some(index);
            }

            fallback.get_or_insert(index);
        }

        fallback
    }

    /// Alternative names from the header line.
    ///
    /// Backslash runs separate names within any cell. The first cell labels
    /// the axes, and is skipped whole, when its leading piece is empty or
    /// mentions outcomes or alternatives.
    fn header_names(line: &str) -> Vec<String> {
        let cells = Self::split_cells(line);
        let Some((corner, rest)) = cells.split_first() else {
            return Vec::new();
        };

        let corner_pieces: Vec<&str> = BACKSLASHES.split(corner).map(str::trim).collect();
        let corner_is_label = corner_pieces
            .first()
            .map_or(true, |piece| piece.is_empty() || LABEL_CELL.is_match(piece));
        let leading = if corner_is_label {
            Vec::new()
        } else {
            corner_pieces
        };

        leading
            .into_iter()
            .chain(rest.iter().flat_map(|cell| BACKSLASHES.split(cell)))
            .map(str::trim)
            .enumerate()
            .map(|(index, name)| {
                if name.is_empty() {
                    format!("Alternative {}", index + 1)
                } else {
                    name.to_string()
                }
            })
            .collect()
    }

    /// Writes one outcome row into the builder.
    fn assign_row(builder: &mut PayoffTableBuilder, line: &str, state: State) {
        let cells = Self::split_cells(line);
        let count = builder.len();

        let (offset, width) = if cells.len() == count {
            (0, count)
        } else if cells.len() == count + 1 {
            // Leading row label
            (1, count)
        } else {
            // Extra leading cells are dropped
            (cells.len().saturating_sub(count), cells.len().min(count))
        };

        for index in 0..width {
            if let Some(cell) = cells.get(index + offset) {
                builder.set_outcome(index, state, parse_number(cell));
            }
        }
    }
}

impl PayoffTableParser for LenientCsvParser {
    fn parse(&self, text: &str) -> PayoffTable {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<&str> = text
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            debug!("Empty table text");
            return PayoffTable::empty();
        }

        let Some(header_index) = Self::find_header(&lines) else {
            warn!(lines = lines.len(), "No header row found in table text");
            return PayoffTable::empty();
        };

        let names = Self::header_names(lines[header_index]);
        debug!(
            header_index,
            alternatives = names.len(),
            "Detected payoff table header"
        );

        let mut builder = PayoffTable::builder().names(names);

        let outcome_lines = &lines[header_index + 1..];
        for (line, state) in outcome_lines.iter().zip(OUTCOME_ROWS) {
            Self::assign_row(&mut builder, line, state);
        }

        debug!(
            outcome_rows = outcome_lines.len().min(OUTCOME_ROWS.len()),
            ignored_rows = outcome_lines.len().saturating_sub(OUTCOME_ROWS.len()),
            "Parsed outcome rows"
        );

        builder.build()
    }
}

/// Reads a numeric cell, returning 0 for anything that is not a finite number.
///
/// Whitespace is removed, a comma is read as the decimal separator when the
/// cell has no dot, and stray characters are dropped. The longest numeric
/// prefix is used, so `"12abc"` reads as 12 and `"1e"` as 1.
pub fn parse_number(cell: &str) -> f64 {
    let compact = WHITESPACE.replace_all(cell, "");
    let decimal = if compact.contains('.') {
        compact.into_owned()
    } else {
        compact.replacen(',', ".", 1)
    };
    let numeric = NON_NUMERIC.replace_all(&decimal, "");

    // Every remaining character is ASCII, so any byte index is a char boundary.
    (1..=numeric.len())
        .rev()
        .find_map(|end| numeric[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
