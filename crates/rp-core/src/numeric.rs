use thiserror::Error;

/// Signed edge weight. No sign constraint is enforced.
pub type Weight = i64;

/// Accumulated path distance from the start node.
pub type Distance = i64;

/// `dist + weight` left the representable `Distance` range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("distance {dist} plus weight {weight} overflows")]
pub struct DistanceOverflow {
    pub dist: Distance,
    pub weight: Weight,
}

/// Candidate distance for `v` when relaxing `u -> v` with weight `w`.
///
/// `Ok(None)` while `u` is still unreached.
pub fn relax_candidate(
    dist_u: Option<Distance>,
    w: Weight,
) -> Result<Option<Distance>, DistanceOverflow> {
    match dist_u {
        None => Ok(None),
        Some(d) => d
            .checked_add(w)
            .map(Some)
            .ok_or(DistanceOverflow { dist: d, weight: w }),
    }
}

/// Whether `candidate` strictly improves on the current best `dist_v`.
///
/// An unreached destination (`None`) is improved by any finite candidate.
pub fn improves(candidate: Distance, dist_v: Option<Distance>) -> bool {
    match dist_v {
        Some(current) => candidate < current,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_source_yields_nothing() {
        assert_eq!(relax_candidate(None, 5), Ok(None));
        assert_eq!(relax_candidate(Some(2), 5), Ok(Some(7)));
        assert_eq!(relax_candidate(Some(2), -5), Ok(Some(-3)));
    }

    #[test]
    fn overflow_is_reported_not_clamped() {
        assert_eq!(
            relax_candidate(Some(Distance::MAX), 1),
            Err(DistanceOverflow {
                dist: Distance::MAX,
                weight: 1
            })
        );
        assert!(relax_candidate(Some(Distance::MIN), -1).is_err());
        assert_eq!(relax_candidate(None, Weight::MIN), Ok(None));
    }

    #[test]
    fn improvement_is_strict() {
        assert!(improves(3, None));
        assert!(improves(3, Some(4)));
        assert!(!improves(4, Some(4)));
        assert!(!improves(5, Some(4)));
    }
}
