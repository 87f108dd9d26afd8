use crate::gum::{ContentKind, Machine};
use log::debug;
use rand::Rng;

/// Draws one gumball. A mixed machine yields red or green with equal odds,
/// any other machine yields exactly what it holds.
pub fn buy_gum<R: Rng>(machine: &Machine, rng: &mut R) -> ContentKind {
    let gum = match machine.actual {
        ContentKind::Mixed => {
            if rng.random_bool(0.5) {
                ContentKind::RedOnly
            } else {
                ContentKind::GreenOnly
            }
        }
        kind => kind,
    };
    debug!("bought {} gum from the \"{}\" machine", gum, machine.label);

    gum
}
