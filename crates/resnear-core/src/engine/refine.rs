use super::indexer::GroupPartition;
use crate::core::models::coords::CoordinateView;
use crate::core::utils::geometry::squared_distance;
use std::ops::Range;

/// A candidate accepted by [`refine`]: the partner group and its nearest distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub partner: usize,
    pub distance: f64,
}

/// Smallest squared distance between any atom of `a` and any atom of `b`.
///
/// Returns `None` when either range is empty.
pub fn min_squared_distance(coords: &CoordinateView, a: Range<usize>, b: Range<usize>) -> Option<f64> {
    a.flat_map(|j| {
        let pj = coords.point(j);
        b.clone().map(move |k| squared_distance(&pj, &coords.point(k)))
    })
    .reduce(f64::min)
}

/// Exact check of each candidate against the target group.
///
/// The target itself is skipped. A candidate is accepted when its minimum squared distance
/// is at most `cutoff_squared`; only that minimum is kept, and it is square-rooted once for
/// reporting. Accepted contacts follow the order of `candidates`.
pub fn refine(
    candidates: &[usize],
    target: usize,
    coords: &CoordinateView,
    partition: &GroupPartition,
    cutoff_squared: f64,
) -> Vec<Contact> {
    let target_atoms = partition.atoms(target);
    candidates
        .iter()
        .filter(|&&candidate| candidate != target)
        .filter_map(|&candidate| {
            let min_sq =
                min_squared_distance(coords, partition.atoms(candidate), target_atoms.clone())?;
            (min_sq <= cutoff_squared).then(|| Contact {
                partner: candidate,
                distance: min_sq.sqrt(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_squared_distance_considers_every_atom_pair() {
        let x = [0.0, 10.0, 4.0, 13.0];
        let y = [0.0; 4];
        let z = [0.0; 4];
        let coords = CoordinateView::new(&x, &y, &z).unwrap();
        assert_eq!(min_squared_distance(&coords, 0..2, 2..4), Some(9.0));
    }

    #[test]
    fn min_squared_distance_of_empty_range_is_none() {
        let x = [0.0];
        let coords = CoordinateView::new(&x, &x, &x).unwrap();
        assert_eq!(min_squared_distance(&coords, 0..0, 0..1), None);
        assert_eq!(min_squared_distance(&coords, 0..1, 1..1), None);
    }

    #[test]
    fn refine_skips_target_and_distant_candidates() {
        let x = [0.0, 2.0, 10.0];
        let y = [0.0; 3];
        let z = [0.0; 3];
        let coords = CoordinateView::new(&x, &y, &z).unwrap();
        let partition = GroupPartition::new(vec![0, 1, 2, 3], vec!["ALA", "GLY", "SER"]).unwrap();

        let contacts = refine(&[0, 1, 2], 0, &coords, &partition, 9.0);
        assert_eq!(
            contacts,
            vec![Contact {
                partner: 1,
                distance: 2.0
            }]
        );
    }

    #[test]
    fn refine_accepts_candidates_exactly_at_cutoff() {
        let x = [0.0, 3.0];
        let y = [0.0; 2];
        let z = [0.0; 2];
        let coords = CoordinateView::new(&x, &y, &z).unwrap();
        let partition = GroupPartition::new(vec![0, 1, 2], vec!["A", "B"]).unwrap();

        let contacts = refine(&[0, 1], 0, &coords, &partition, 9.0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].distance, 3.0);
    }

    #[test]
    fn refine_reports_only_the_nearest_pair() {
        // Target atoms at x = 0 and 1; candidate atoms at x = 2.5 and 3.
        let x = [0.0, 1.0, 2.5, 3.0];
        let y = [0.0, 0.0, 0.0, 0.0];
        let z = [0.0, 0.0, 0.0, 0.0];
        let coords = CoordinateView::new(&x, &y, &z).unwrap();
        let partition = GroupPartition::new(vec![0, 2, 4], vec!["LIG", "ALA"]).unwrap();

        let contacts = refine(&[1], 0, &coords, &partition, 25.0);
        assert_eq!(
            contacts,
            vec![Contact {
                partner: 1,
                distance: 1.5
            }]
        );
    }

    #[test]
    fn refine_ignores_empty_candidate_groups() {
        let x = [0.0];
        let coords = CoordinateView::new(&x, &x, &x).unwrap();
        let partition = GroupPartition::new(vec![0, 1, 1], vec!["A", "B"]).unwrap();
        assert!(refine(&[0, 1], 0, &coords, &partition, 100.0).is_empty());
    }
}
