//! Reading a rectangular plane of cell characters

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("invalid cell {cell:?} at row {row}, column {column}")]
    InvalidCell {
        cell: char,
        row: usize,
        column: usize,
    },

    #[error("row {row} has {len} cells, but the first row has {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("input contained no cells")]
    Empty,
}

/// Parse each line of `input` into a row of cells, using `decode` to
/// interpret each character. Blank lines and surrounding whitespace are
/// ignored. Rows aren't required to be the same length; callers that need a
/// rectangle should check with `require_rectangle`.
pub fn parse_plane<T>(
    input: &str,
    decode: impl Fn(char) -> Option<T>,
) -> Result<Vec<Vec<T>>, MalformedInput> {
    let rows: Vec<Vec<T>> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(column, cell)| {
                    decode(cell).ok_or(MalformedInput::InvalidCell { cell, row, column })
                })
                .collect::<Result<Vec<T>, MalformedInput>>()
        })
        .collect::<Result<_, _>>()?;

    match rows.is_empty() {
        true => Err(MalformedInput::Empty),
        false => Ok(rows),
    }
}

/// Check that every row is as long as the first one, returning that length.
pub fn require_rectangle<T>(rows: &[Vec<T>]) -> Result<usize, MalformedInput> {
    let expected = rows.first().map(Vec::len).unwrap_or(0);

    rows.iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
        .map_or(Ok(expected), |(row, cells)| {
            Err(MalformedInput::RaggedRow {
                row,
                len: cells.len(),
                expected,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(cell: char) -> Option<bool> {
        match cell {
            '#' => Some(true),
            '.' => Some(false),
            _ => None,
        }
    }

    #[test]
    fn parses_rows() {
        let rows = parse_plane(".#\n#.\n", decode).unwrap();
        assert_eq!(rows, vec![vec![false, true], vec![true, false]]);
    }

    #[test]
    fn skips_blank_lines_and_carriage_returns() {
        let rows = parse_plane("\r\n.#\r\n\r\n#.\r\n", decode).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            parse_plane("..\n.x\n", decode),
            Err(MalformedInput::InvalidCell {
                cell: 'x',
                row: 1,
                column: 1
            })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_plane("\n  \n", decode), Err(MalformedInput::Empty));
    }

    #[test]
    fn ragged_rows() {
        let rows = parse_plane("...\n..\n", decode).unwrap();

        assert_eq!(
            require_rectangle(&rows),
            Err(MalformedInput::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }
}
