//! Removal of inferred super-property entries.
//!
//! With inference enabled the triplestore materializes `Q(s, o)` for every
//! `P(s, o)` where `P rdfs:subPropertyOf Q`. When `Q` ends up with exactly the
//! same aggregated value as `P`, the `Q` entry repeats what `P` says and is
//! dropped. Values that differ in any way, including shape, are kept.

use std::collections::BTreeSet;

use tracing::debug;

use crate::aggregate::{PropertyMap, SuperPropertyMap};

/// Drops super-property entries subsumed by their sub-property.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsumptionFilter;

impl SubsumptionFilter {
    /// Removes every super-property whose value equals the value of a
    /// sub-property that stays in the map, and returns the removed keys.
    ///
    /// Chains collapse onto their most specific predicate: with
    /// `A ⊑ B ⊑ C` and equal values only `A` remains. A predicate declared
    /// as its own super-property is never removed, and neither is a cycle
    /// of predicates with no sub-property outside it, so a value is never
    /// dropped from every key that carries it.
    pub fn apply(properties: &mut PropertyMap, super_properties: &SuperPropertyMap) -> Vec<String> {
        let redundant: Vec<(&str, &str)> = super_properties
            .iter()
            .filter(|(sub, sup)| sub != sup)
            .filter(|(sub, sup)| match (properties.get(*sub), properties.get(*sup)) {
                (Some(sub_value), Some(sup_value)) => sub_value == sup_value,
                _ => false,
            })
            .collect();
        let candidates: BTreeSet<&str> = redundant.iter().map(|(_, sup)| *sup).collect();

        let mut removed: BTreeSet<&str> = BTreeSet::new();
        loop {
            let before = removed.len();
            for (sub, sup) in &redundant {
                if !candidates.contains(sub) || removed.contains(sub) {
                    removed.insert(*sup);
                }
            }
            if removed.len() == before {
                break;
            }
        }

        let removed: Vec<String> = removed.into_iter().map(str::to_owned).collect();
        for key in &removed {
            properties.remove(key);
            debug!(predicate = %key, "dropped super-property subsumed by its sub-property");
        }
        removed
    }
}
