use crate::gum::{ContentKind, Label, Machine, MACHINES_COUNT};
use itertools::Itertools;
use log::{debug, trace};

// Machines are filled from a permutation in this label order.
pub const LABEL_ORDER: [Label; MACHINES_COUNT] = [Label::Red, Label::RedAndGreen, Label::Green];

// Slot of the "Red and Green" machine in a configuration.
pub const PURCHASE_SLOT: usize = 1;

pub type Configuration = [Machine; MACHINES_COUNT];

#[derive(Debug, PartialEq)]
pub enum SearchError {
    NoValidConfiguration { checked: usize },
}

pub fn generate_permutations(items: &[ContentKind]) -> Vec<Vec<ContentKind>> {
    items.iter()
        .copied()
        .permutations(items.len())
        .collect()
}

/// Returns `true` only when no machine holds what its own label claims.
pub fn validate_configuration(machines: &[Machine]) -> bool {
    machines.iter().all(Machine::is_mislabelled)
}

pub fn build_configuration(permutation: &[ContentKind]) -> Configuration {
    [
        Machine::new(LABEL_ORDER[0], permutation[0]),
        Machine::new(LABEL_ORDER[1], permutation[1]),
        Machine::new(LABEL_ORDER[2], permutation[2]),
    ]
}

/// Walks the permutations in generator order and takes the first one where every label is wrong.
pub fn find_configuration(kinds: &[ContentKind]) -> Result<Configuration, SearchError> {
    let permutations = generate_permutations(kinds);
    let checked = permutations.len();

    permutations.iter()
        .map(|permutation| {
            trace!("candidate: {:?}", permutation);
            build_configuration(permutation)
        })
        .find(|machines| {
            let valid = validate_configuration(machines);
            debug!("configuration {:?} is {}", machines, if valid { "accepted" } else { "rejected" });
            valid
        })
        .ok_or(SearchError::NoValidConfiguration { checked })
}
