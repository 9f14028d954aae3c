//! Rewrite a target manifest's card identities from newer source manifests.

use serde::Serialize;
use tracing::{debug, info};

use crate::model::{CardEntry, Face, Order};
use crate::parser::ManifestIndex;

/// Outcome of reconciling one target order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// The rewritten order.
    pub order: Order,
    /// Cards whose id and name were replaced.
    pub updated: usize,
    /// Cards left as they were.
    pub unchanged: usize,
}

/// First card with exactly this query in the given section, newest manifest first.
fn find_source<'a>(sources: &'a ManifestIndex, face: Face, query: &str) -> Option<&'a CardEntry> {
    sources
        .manifests_by_recency()
        .iter()
        .flat_map(|m| m.order.cards(face))
        .find(|card| card.query == query)
}

/// Update `id` and `name` of every card in `target` from `sources`.
///
/// Fronts are processed before backs and each section only looks at the same
/// section of the sources. The first source card with an equal `query` wins;
/// unmatched cards are left untouched.
pub fn reconcile(mut target: Order, sources: &ManifestIndex) -> Reconciliation {
    let mut updated = 0;
    let mut unchanged = 0;

    for face in [Face::Fronts, Face::Backs] {
        let cards = match target.cards_mut(face) {
            Some(cards) if !cards.is_empty() => cards,
            _ => {
                info!("No cards to update in section: {}", face);
                continue;
            }
        };

        for card in cards.iter_mut() {
            match find_source(sources, face, &card.query) {
                Some(source) => {
                    info!("Updating card: {}", card.query);
                    card.id = source.id.clone();
                    card.name = source.name.clone();
                    updated += 1;
                }
                None => {
                    debug!("No update found for card: {}", card.query);
                    unchanged += 1;
                }
            }
        }
    }

    Reconciliation {
        order: target,
        updated,
        unchanged,
    }
}
