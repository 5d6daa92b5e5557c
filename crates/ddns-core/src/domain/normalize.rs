//! Sorting and deduplication of domain sequences

use super::Domain;

/// Sort a domain sequence and remove every duplicate
///
/// Deduplication is global: the sequence is fully sorted before adjacent
/// equal entries are compacted, so the result is strictly ascending.
pub fn normalize(mut domains: Vec<Domain>) -> Vec<Domain> {
    domains.sort_unstable();
    domains.dedup();
    domains
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn domains(names: &[&str]) -> Vec<Domain> {
        names.iter().map(|n| Domain::new(n).unwrap()).collect()
    }

    fn samples() -> Vec<Vec<Domain>> {
        vec![
            Vec::new(),
            domains(&["a.com"]),
            domains(&["b.com", "a.com", "b.com"]),
            domains(&["c.com", "a.com", "b.com", "a.com", "c.com"]),
            domains(&["x.example", "*.example", "x.example", "*.example", "example"]),
        ]
    }

    #[test]
    fn test_removes_non_adjacent_duplicates() {
        let result = normalize(domains(&["b.com", "a.com", "b.com"]));
        assert_eq!(result, domains(&["a.com", "b.com"]));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for sample in samples() {
            let once = normalize(sample);
            let twice = normalize(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_result_is_strictly_ascending_with_same_members() {
        for sample in samples() {
            let distinct: BTreeSet<Domain> = sample.iter().cloned().collect();
            let result = normalize(sample);

            assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(result.iter().cloned().collect::<BTreeSet<_>>(), distinct);
            assert_eq!(result.len(), distinct.len());
        }
    }
}
