// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board partitioning for rendering.

use thiserror::Error;

use crate::Pit;

/// The pit list split into the four rendered groups: each player's home
/// flanking the two rows of playground pits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout<'a> {
    pub first_home: &'a Pit,
    pub first_row: &'a [Pit],
    pub second_row: &'a [Pit],
    pub second_home: &'a Pit,
}

/// Pit sequences that cannot be laid out as a two-sided board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The two sides cannot be equal halves
    #[error("board needs an even number of pits, got {0}")]
    UnevenBoard(usize),

    /// A side must hold at least one playground pit plus its home
    #[error("board side of {0} pits is too small")]
    SideTooSmall(usize),
}

/// Split the pit list into two equal halves in original order; the last pit
/// of each half is that player's home. Borrows only, the caller's sequence
/// is never reordered or consumed.
pub fn split_rows(pits: &[Pit]) -> Result<BoardLayout<'_>, LayoutError> {
    if pits.len() % 2 != 0 {
        return Err(LayoutError::UnevenBoard(pits.len()));
    }
    let half = pits.len() / 2;
    if half < 2 {
        return Err(LayoutError::SideTooSmall(half));
    }

    let (first, second) = pits.split_at(half);
    Ok(BoardLayout {
        first_home: &first[half - 1],
        first_row: &first[..half - 1],
        second_row: &second[..half - 1],
        second_home: &second[half - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PitKind, Player};

    fn pit(id: u32, kind: PitKind) -> Pit {
        Pit {
            id,
            owner: Some(Player::new(if id < 7 { "PLAYER_1" } else { "PLAYER_2" })),
            kind,
            stones: 6,
        }
    }

    fn standard_board() -> Vec<Pit> {
        (0..14)
            .map(|id| {
                let kind = if id % 7 == 6 {
                    PitKind::Home
                } else {
                    PitKind::Playground
                };
                pit(id, kind)
            })
            .collect()
    }

    #[test]
    fn splits_fourteen_pits_into_rows_and_homes() {
        let pits = standard_board();
        let layout = split_rows(&pits).unwrap();

        assert_eq!(layout.first_home.id, 6);
        assert_eq!(layout.second_home.id, 13);
        assert_eq!(layout.first_home.kind, PitKind::Home);
        assert_eq!(layout.second_home.kind, PitKind::Home);

        let first_ids: Vec<u32> = layout.first_row.iter().map(|p| p.id).collect();
        let second_ids: Vec<u32> = layout.second_row.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(second_ids, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(layout.first_row.len() + layout.second_row.len(), 12);
    }

    #[test]
    fn splitting_leaves_input_untouched() {
        let pits = standard_board();
        let before = pits.clone();
        let _ = split_rows(&pits).unwrap();
        assert_eq!(pits, before);
    }

    #[test]
    fn rejects_odd_pit_count() {
        let mut pits = standard_board();
        pits.pop();
        assert_eq!(split_rows(&pits), Err(LayoutError::UnevenBoard(13)));
    }

    #[test]
    fn rejects_board_without_room_for_rows() {
        let pits = vec![pit(0, PitKind::Home), pit(1, PitKind::Home)];
        assert_eq!(split_rows(&pits), Err(LayoutError::SideTooSmall(1)));
    }
}
