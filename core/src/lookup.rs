//! Class selection shared by every depth-, time- and altitude-keyed table.
//!
//! Tables are built for discrete classes, so a query always rounds up to the
//! smallest tabulated key that is at least the query value. A query equal to a
//! key selects that key's class.

/// Smallest entry of `sorted` whose key is `>= query`.
///
/// `sorted` must be ascending by `key`. Returns `None` when the query lies past
/// the last class or is not comparable (NaN).
pub fn round_up<T, K, F>(sorted: &[T], query: K, key: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if query.partial_cmp(&query).is_none() {
        return None;
    }
    let idx = sorted.partition_point(|item| key(item) < query);
    sorted.get(idx)
}

/// `true` when keys are strictly ascending.
pub fn is_strictly_ascending<T, K, F>(items: &[T], key: F) -> bool
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.windows(2).all(|pair| key(&pair[0]) < key(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [f64; 4] = [10.0, 20.0, 30.0, 40.0];

    fn lookup(query: f64) -> Option<f64> {
        round_up(&CLASSES, query, |d| *d).copied()
    }

    #[test]
    fn test_rounds_up_between_classes() {
        assert_eq!(lookup(11.0), Some(20.0));
        assert_eq!(lookup(29.9), Some(30.0));
        assert_eq!(lookup(0.0), Some(10.0));
        assert_eq!(lookup(-3.0), Some(10.0));
    }

    #[test]
    fn test_boundary_selects_exact_class() {
        for class in CLASSES {
            assert_eq!(lookup(class), Some(class));
        }
    }

    #[test]
    fn test_past_last_class() {
        assert_eq!(lookup(40.01), None);
        assert_eq!(lookup(f64::INFINITY), None);
    }

    #[test]
    fn test_nan_query() {
        assert_eq!(lookup(f64::NAN), None);
    }

    #[test]
    fn test_empty_table() {
        let empty: [u32; 0] = [];
        assert_eq!(round_up(&empty, 5, |t| *t), None);
    }

    #[test]
    fn test_integer_keys() {
        let times = [63u32, 70, 80, 90];
        assert_eq!(round_up(&times, 63, |t| *t), Some(&63));
        assert_eq!(round_up(&times, 64, |t| *t), Some(&70));
        assert_eq!(round_up(&times, 91, |t| *t), None);
    }

    #[test]
    fn test_strictly_ascending() {
        assert!(is_strictly_ascending(&CLASSES, |d| *d));
        assert!(!is_strictly_ascending(&[1, 2, 2], |t| *t));
        assert!(!is_strictly_ascending(&[3, 1], |t| *t));
        assert!(is_strictly_ascending::<u32, u32, _>(&[], |t| *t));
    }
}
