//! Outcome table for every pair of moves.

use super::move_set::MoveSet;
use super::outcome::{determine_outcome, Outcome};
use crate::error::Result;
use std::fmt;

const CORNER: &str = "You \\ PC >";

/// Outcomes for every (row, column) pair, read from the row move's side
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTable {
    moves: MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl HelpTable {
    /// Outcome of playing `row` against `col`
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Moves labelling both axes
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// One row per move, in cycle order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.moves
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

/// Build the table by asking [`determine_outcome`] about every pair
pub fn help_table(moves: &MoveSet) -> Result<HelpTable> {
    let cells = moves
        .iter()
        .map(|row| {
            moves
                .iter()
                .map(|col| determine_outcome(row, col, moves))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HelpTable {
        moves: moves.clone(),
        cells,
    })
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first_width = self
            .moves
            .iter()
            .map(|m| m.chars().count())
            .chain(std::iter::once(CORNER.len()))
            .max()
            .unwrap_or(0);
        let col_widths: Vec<usize> = self
            .moves
            .iter()
            .map(|m| m.chars().count().max(Outcome::Lose.as_str().len()))
            .collect();

        let mut header = format!("{:<first_width$}", CORNER);
        for (name, width) in self.moves.iter().zip(&col_widths) {
            header.push_str(&format!(" | {:<width$}", name));
        }
        let rule = "-".repeat(header.chars().count());

        writeln!(f, "{rule}")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{rule}")?;
        for (name, outcomes) in self.rows() {
            write!(f, "{:<first_width$}", name)?;
            for (outcome, width) in outcomes.iter().zip(&col_widths) {
                write!(f, " | {:<width$}", outcome.as_str())?;
            }
            writeln!(f)?;
        }
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_outcome_engine() {
        let moves = MoveSet::new(["Rock", "Spock", "Paper", "Lizard", "Scissors"]).unwrap();
        let table = help_table(&moves).unwrap();

        for (i, row) in moves.iter().enumerate() {
            for (j, col) in moves.iter().enumerate() {
                assert_eq!(
                    table.get(i, j).unwrap(),
                    determine_outcome(row, col, &moves).unwrap()
                );
            }
        }
        assert_eq!(table.get(5, 0), None);
    }

    #[test]
    fn test_diagonal_is_draw() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let table = help_table(&moves).unwrap();
        let draws = table
            .rows()
            .flat_map(|(_, r)| r.iter())
            .filter(|o| **o == Outcome::Draw)
            .count();

        assert_eq!(draws, 7);
        for i in 0..7 {
            assert_eq!(table.get(i, i), Some(Outcome::Draw));
        }
    }

    #[test]
    fn test_render_classic() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let rendered = help_table(&moves).unwrap().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "You \\ PC > | Rock | Paper | Scissors");
        assert_eq!(lines[3], "Rock       | Draw | Lose  | Win     ");
        assert_eq!(lines[4], "Paper      | Win  | Draw  | Lose    ");
        assert_eq!(lines[5], "Scissors   | Lose | Win   | Draw    ");
        assert!(lines[0].chars().all(|c| c == '-'));
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
