use super::VariableEncoding;
use crate::basic_types::Cell;
use crate::basic_types::Variable;

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// The variables whose cells a queen on `variable` attacks: the rest of its row, the rest of its
/// column, and every cell along the four diagonal rays up to the edge of the board.
///
/// The cell itself is never included, and no cell is reported twice.
pub fn attackers(encoding: &VariableEncoding, variable: Variable) -> Vec<Variable> {
    let size = encoding.size();
    let origin = encoding.to_cell(variable);

    let mut result = Vec::with_capacity(4 * size);

    result.extend(
        (0..size)
            .filter(|&column| column != origin.column)
            .map(|column| encoding.to_variable(Cell::new(origin.row, column))),
    );
    result.extend(
        (0..size)
            .filter(|&row| row != origin.row)
            .map(|row| encoding.to_variable(Cell::new(row, origin.column))),
    );

    for (row_step, column_step) in DIAGONALS {
        let mut row = origin.row.checked_add_signed(row_step);
        let mut column = origin.column.checked_add_signed(column_step);

        while let (Some(r), Some(c)) = (row, column) {
            if r >= size || c >= size {
                break;
            }

            result.push(encoding.to_variable(Cell::new(r, c)));

            row = r.checked_add_signed(row_step);
            column = c.checked_add_signed(column_step);
        }
    }

    result
}

/// Whether queens on `first` and `second` attack each other.
pub fn attacks(first: Cell, second: Cell) -> bool {
    if first == second {
        return false;
    }

    first.row == second.row
        || first.column == second.column
        || first.row.abs_diff(second.row) == first.column.abs_diff(second.column)
}

#[cfg(test)]
mod tests {
    use super::attackers;
    use super::attacks;
    use crate::basic_types::Cell;
    use crate::basic_types::HashSet;
    use crate::encoding::VariableEncoding;

    #[test]
    fn corner_attacks_row_column_and_one_diagonal() {
        let encoding = VariableEncoding::new(4);
        let corner = encoding.to_variable(Cell::new(0, 0));

        let result = attackers(&encoding, corner);

        assert_eq!(result.len(), 9);
        assert!(!result.contains(&corner));
    }

    #[test]
    fn centre_attacks_all_four_rays() {
        let encoding = VariableEncoding::new(5);
        let centre = encoding.to_variable(Cell::new(2, 2));

        let result = attackers(&encoding, centre);
        let unique = result.iter().copied().collect::<HashSet<_>>();

        assert_eq!(result.len(), 16);
        assert_eq!(unique.len(), 16);
        assert!(unique.contains(&encoding.to_variable(Cell::new(0, 4))));
        assert!(unique.contains(&encoding.to_variable(Cell::new(4, 0))));
        assert!(!unique.contains(&encoding.to_variable(Cell::new(0, 1))));
    }

    #[test]
    fn attacker_sets_agree_with_pairwise_relation() {
        let encoding = VariableEncoding::new(6);

        for variable in encoding.variables() {
            let set = attackers(&encoding, variable)
                .into_iter()
                .collect::<HashSet<_>>();
            let origin = encoding.to_cell(variable);

            for other in encoding.variables() {
                assert_eq!(
                    set.contains(&other),
                    attacks(origin, encoding.to_cell(other)),
                    "mismatch between {origin} and {}",
                    encoding.to_cell(other)
                );
            }
        }
    }

    #[test]
    fn single_cell_board_has_no_attackers() {
        let encoding = VariableEncoding::new(1);

        assert!(attackers(&encoding, encoding.to_variable(Cell::new(0, 0))).is_empty());
    }
}
