//! Path reconstruction from a predecessor map

use std::collections::HashMap;

use crate::dataset::CountryId;

/// Walk predecessors back from `to` until `from`.
///
/// Returns `None` if the chain is broken, which only happens when `to` was
/// never reached.
pub fn reconstruct_path(
    from: &CountryId,
    to: &CountryId,
    predecessors: &HashMap<&CountryId, &CountryId>,
) -> Option<Vec<CountryId>> {
    let mut countries = vec![to.clone()];
    let mut current = to;

    while current != from {
        current = predecessors.get(current)?;
        countries.push(current.clone());
    }

    countries.reverse();
    Some(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_chain() {
        let a = CountryId::from("A");
        let b = CountryId::from("B");
        let c = CountryId::from("C");
        let predecessors: HashMap<&CountryId, &CountryId> = [(&b, &a), (&c, &b)].into();

        let path = reconstruct_path(&a, &c, &predecessors).unwrap();
        assert_eq!(path, vec![a.clone(), b.clone(), c.clone()]);
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let a = CountryId::from("A");
        let c = CountryId::from("C");
        assert!(reconstruct_path(&a, &c, &HashMap::new()).is_none());
    }
}
