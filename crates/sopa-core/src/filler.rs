use crate::geometry::letter_positions;
use crate::{Grid, PlacementSet, ALPHABET};
use rand::seq::SliceRandom;
use rand::Rng;

/// Random letter from the Spanish alphabet
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    *ALPHABET.choose(rng).unwrap_or(&'A')
}

/// Rasterize placements onto a `size` grid of random letters
pub fn fill<R: Rng + ?Sized>(size: usize, placements: &PlacementSet, rng: &mut R) -> Grid {
    let mut cells = vec![vec!['A'; size]; size];
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = random_letter(rng);
        }
    }

    for placement in placements {
        for (pos, letter) in letter_positions(placement) {
            cells[pos.row][pos.col] = letter;
        }
    }

    Grid::from_square(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_letter, Orientation, Placement, Position, Word};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_placements() -> PlacementSet {
        [
            Placement::new(Word::new("PERRO").unwrap(), 1, 5, Orientation::Vertical),
            Placement::new(Word::new("GATO").unwrap(), 2, 2, Orientation::Diagonal),
            Placement::new(Word::new("AUTO").unwrap(), 6, 0, Orientation::HorizontalReversed),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_fill_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = fill(7, &sample_placements(), &mut rng);

        assert_eq!(grid.size(), 7);
        assert!(grid.rows().iter().all(|row| row.len() == 7));
        assert!(grid.rows().iter().flatten().all(|&c| is_letter(c)));
    }

    #[test]
    fn test_fill_writes_footprints() {
        let mut rng = StdRng::seed_from_u64(42);
        let placements = sample_placements();
        let grid = fill(7, &placements, &mut rng);

        for placement in &placements {
            for (pos, letter) in letter_positions(placement) {
                assert_eq!(grid.get(pos), Some(letter));
            }
        }
        // AUTO reversed reads OTUA left to right from (6, 0)
        let row: String = (0..4).map(|col| grid.at(6, col)).collect();
        assert_eq!(row, "OTUA");
        assert_eq!(grid.get(Position::new(5, 5)), Some('O'));
    }

    #[test]
    fn test_fill_without_placements() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = fill(3, &PlacementSet::new(), &mut rng);
        assert_eq!(grid.size(), 3);
    }

    #[test]
    fn test_random_letter_covers_enye() {
        let mut rng = StdRng::seed_from_u64(9);
        let seen: Vec<char> = (0..2000).map(|_| random_letter(&mut rng)).collect();
        assert!(seen.contains(&'Ñ'));
        assert!(seen.iter().all(|&c| is_letter(c)));
    }
}
