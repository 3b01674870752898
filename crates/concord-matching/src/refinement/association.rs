//! Injective member mapping for association refinement.
//!
//! `compatible[i][j]` says specific member `i` refines general member `j`.
//! Any saturating matching will do; which one is found does not matter.

/// Whether every specific member can be mapped to a distinct general member.
pub fn has_injective_mapping(compatible: &[Vec<bool>], general_len: usize) -> bool {
    if compatible.len() > general_len {
        return false;
    }
    let mut owner: Vec<Option<usize>> = vec![None; general_len];
    for specific in 0..compatible.len() {
        let mut visited = vec![false; general_len];
        if !augment(specific, compatible, &mut owner, &mut visited) {
            return false;
        }
    }
    true
}

/// Kuhn's augmenting path step.
fn augment(
    specific: usize,
    compatible: &[Vec<bool>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for general in 0..owner.len() {
        if !compatible[specific][general] || visited[general] {
            continue;
        }
        visited[general] = true;
        let free = match owner[general] {
            None => true,
            Some(other) => augment(other, compatible, owner, visited),
        };
        if free {
            owner[general] = Some(specific);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_choice_is_repaired() {
        // Specific 0 fits both; specific 1 fits only general 0.
        let compatible = vec![vec![true, true], vec![true, false]];
        assert!(has_injective_mapping(&compatible, 2));
    }

    #[test]
    fn two_specifics_competing_for_one_general() {
        let compatible = vec![vec![true, false, false], vec![true, false, false]];
        assert!(!has_injective_mapping(&compatible, 3));
    }

    #[test]
    fn more_specifics_than_generals() {
        let compatible = vec![vec![true], vec![true]];
        assert!(!has_injective_mapping(&compatible, 1));
    }

    #[test]
    fn empty_specific_maps_trivially() {
        assert!(has_injective_mapping(&[], 3));
    }
}
