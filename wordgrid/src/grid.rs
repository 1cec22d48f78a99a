use growstr::GrowableString;
use growvec::Container;
use tokstream::TokenStream;
use tracing::debug;

use crate::error::{Result, WordGridError};

/// Words of `text`, split on ASCII whitespace, in order.
///
/// # Errors
///
/// Returns an error if `text` is not initialized or an allocation fails.
pub fn split_words(text: &GrowableString) -> Result<Container<GrowableString>> {
    let mut stream = TokenStream::from_string(text)?;
    let mut words = Container::new()?;
    while let Some(word) = stream.next_word()? {
        words.push(word)?;
    }
    Ok(words)
}

/// # Errors
///
/// Same as [`split_words`].
pub fn word_count(text: &GrowableString) -> Result<usize> {
    let mut stream = TokenStream::from_string(text)?;
    let mut count = 0;
    while stream.next_word()?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Length of the longest word, or 0 if there are none.
///
/// # Errors
///
/// Same as [`split_words`].
pub fn max_word_length(text: &GrowableString) -> Result<usize> {
    let mut stream = TokenStream::from_string(text)?;
    let mut longest = 0;
    while let Some(word) = stream.next_word()? {
        longest = longest.max(word.len());
    }
    Ok(longest)
}

/// Words laid out as columns: column `c` holds word `c` top to bottom,
/// padded with NUL below its last byte.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: GrowableString,
}

impl Grid {
    /// Number of rows, the length of the longest word.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, one per word.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Byte at `(row, column)`; NUL marks padding.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<u8> {
        if column >= self.columns {
            return None;
        }
        self.row(row)?.get(column).copied()
    }

    /// All cells of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.columns;
        self.cells.as_bytes().get(start..start + self.columns)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).filter_map(|row| self.row(row))
    }
}

/// Builds the column layout of the words of `text`.
///
/// # Errors
///
/// - `WordGridError::GridTooLarge` if the cell count overflows
/// - any error of [`split_words`] or of the cell allocation
pub fn transform(text: &GrowableString) -> Result<Grid> {
    let words = split_words(text)?;
    let columns = words.len();
    let rows = words.iter().map(GrowableString::len).max().unwrap_or(0);
    let size = rows
        .checked_mul(columns)
        .ok_or(WordGridError::GridTooLarge { rows, columns })?;

    let mut cells = GrowableString::with_capacity(size)?;
    cells.resize(size)?;
    for (column, word) in words.iter().enumerate() {
        for (row, byte) in word.bytes().enumerate() {
            cells.at_set(row * columns + column, byte)?;
        }
    }
    debug!(rows, columns, "transformed words into grid");
    Ok(Grid {
        rows,
        columns,
        cells,
    })
}

/// Reads the grid row by row: the non-NUL bytes of each row followed by a space.
///
/// # Errors
///
/// Returns an error if the output cannot be allocated.
pub fn encode(grid: &Grid) -> Result<GrowableString> {
    let mut out = GrowableString::with_capacity(grid.cells.len().saturating_add(grid.rows))?;
    for row in grid.iter_rows() {
        for &byte in row.iter().filter(|&&b| b != 0) {
            out.push_back(byte)?;
        }
        out.push_back(b' ')?;
    }
    Ok(out)
}

/// One line per row; every cell is its byte, or a space for padding, then `", "`.
///
/// # Errors
///
/// Returns an error if the output cannot be allocated.
pub fn render(grid: &Grid) -> Result<GrowableString> {
    let mut out = GrowableString::with_capacity(grid.cells.len().saturating_mul(3).saturating_add(grid.rows))?;
    for row in grid.iter_rows() {
        for &byte in row {
            out.push_back(if byte == 0 { b' ' } else { byte })?;
            out.push_bytes(b", ")?;
        }
        out.push_back(b'\n')?;
    }
    Ok(out)
}
