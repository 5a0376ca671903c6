use crate::error::{Error, Result};
use crate::solver::{LocationWithSolution, LocationWithSolutions};

/// Finds the smallest divisor that has a candidate at every location.
///
/// Each candidate set is a contiguous divisor range, so the sets intersect in
/// `max(min_divisor) ..= min(max_divisor)` and the answer is its lower end.
/// An empty location list has no common divisor.
pub fn find_common_divisor(solutions: &[LocationWithSolutions]) -> Result<u64> {
    let no_common = || Error::NoCommonSolution {
        locations: solutions.len(),
        bound: solutions.iter().map(|s| s.bound).max().unwrap_or(0),
    };

    let lowest = solutions
        .iter()
        .map(LocationWithSolutions::min_divisor)
        .max()
        .ok_or_else(no_common)?;
    let highest = solutions
        .iter()
        .map(LocationWithSolutions::max_divisor)
        .min()
        .ok_or_else(no_common)?;

    if lowest <= highest {
        Ok(lowest)
    } else {
        Err(no_common())
    }
}

/// Narrows every location to its candidate with divisor `divisor`.
pub fn assign(divisor: u64, solutions: &[LocationWithSolutions]) -> Result<Vec<LocationWithSolution>> {
    solutions
        .iter()
        .enumerate()
        .map(|(position, s)| {
            s.candidate_for(divisor)
                .map(|solution| LocationWithSolution {
                    location: s.location,
                    solution,
                })
                .ok_or(Error::NoCandidateForDivisor { position, divisor })
        })
        .collect()
}

/// The dividends of the assigned solutions, in run order.
pub fn extract(assigned: &[LocationWithSolution]) -> Vec<u64> {
    assigned.iter().map(|a| a.solution.x).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::solver::{candidates_within, SolutionCandidate};

    fn solved(index: u64, count: u64, bound: u64) -> LocationWithSolutions {
        candidates_within(Location::new(index, count), bound)
    }

    #[test]
    fn test_common_divisor_example() {
        let sets = vec![solved(22, 1, 1000), solved(1, 4, 1000)];
        let divisor = find_common_divisor(&sets).unwrap();
        assert_eq!(divisor, 5);

        let assigned = assign(divisor, &sets).unwrap();
        assert_eq!(assigned[0].solution, SolutionCandidate::new(111, 5));
        assert_eq!(assigned[1].solution, SolutionCandidate::new(9, 5));
        assert_eq!(extract(&assigned), vec![111, 9]);
    }

    #[test]
    fn test_no_common_divisor_at_small_bound() {
        // (22, 1) only admits divisors 2..=4 within 100, (1, 4) needs at least 5.
        let sets = vec![solved(22, 1, 100), solved(1, 4, 100)];
        let err = find_common_divisor(&sets).unwrap_err();
        assert!(matches!(
            err,
            Error::NoCommonSolution {
                locations: 2,
                bound: 100
            }
        ));
    }

    #[test]
    fn test_no_locations() {
        assert!(matches!(
            find_common_divisor(&[]),
            Err(Error::NoCommonSolution { locations: 0, .. })
        ));
    }

    #[test]
    fn test_minimality() {
        let sets = vec![solved(0, 3, 100), solved(2, 1, 100), solved(1, 9, 100)];
        let divisor = find_common_divisor(&sets).unwrap();
        assert_eq!(divisor, 10);
        for y in 1..divisor {
            assert!(!sets.iter().all(|s| s.contains_divisor(y)));
        }
    }

    #[test]
    fn test_removing_divisor_breaks_commonality() {
        let mut sets = vec![solved(22, 1, 1000), solved(1, 4, 1000)];
        let divisor = find_common_divisor(&sets).unwrap();

        sets[1] = sets[1].restrict(divisor + 1..=u64::MAX);

        assert_ne!(find_common_divisor(&sets).unwrap(), divisor);
    }

    #[test]
    fn test_empty_set_blocks_common_divisor() {
        let sets = vec![solved(0, 1, 100), solved(32, 4, 100)];
        assert!(sets[1].is_empty());
        assert!(matches!(
            find_common_divisor(&sets),
            Err(Error::NoCommonSolution { locations: 2, .. })
        ));
    }

    #[test]
    fn test_assign_missing_divisor() {
        let sets = vec![solved(1, 4, 100)];
        let err = assign(3, &sets).unwrap_err();
        assert!(matches!(
            err,
            Error::NoCandidateForDivisor {
                position: 0,
                divisor: 3
            }
        ));
    }

    #[test]
    fn test_extract_preserves_order() {
        let sets = vec![solved(0, 1, 100), solved(1, 1, 100), solved(0, 3, 100), solved(2, 2, 100)];
        let divisor = find_common_divisor(&sets).unwrap();
        assert_eq!(divisor, 4);
        let integers = extract(&assign(divisor, &sets).unwrap());
        assert_eq!(integers, vec![1, 5, 3, 10]);
    }
}
