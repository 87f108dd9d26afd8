use crate::gum::{remove_kind, ContentKind, Label, Machine, ALL_KINDS};
use log::debug;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum DeductionError {
    ImpossibleDraw(ContentKind),
    Ambiguous { label: Label, candidates: Vec<ContentKind> },
    Contradiction { label: Label },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeducedMachine {
    pub label: Label,
    pub kind: ContentKind,
}

/// Machines in the order they were resolved; the "Red and Green" one is always first.
#[derive(Debug, PartialEq)]
pub struct Deduction {
    pub drawn: ContentKind,
    pub machines: Vec<DeducedMachine>,
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, machine) in self.machines.iter().enumerate() {
            writeln!(f, "{}. Machine \"{}\" holds {} (label is wrong)", number + 1, machine.label, machine.kind)?;
        }
        Ok(())
    }
}

/// Works out every machine's contents from a single gumball bought from the
/// "Red and Green" machine. Only the labels of `machines` are looked at.
///
/// The bought-from machine can't be mixed, so it holds exactly the colour that
/// came out. The others are visited in their given order; a machine left with
/// more than one candidate is revisited after the rest have narrowed the pool.
pub fn deduce(drawn: ContentKind, machines: &[Machine]) -> Result<Deduction, DeductionError> {
    let target = match drawn {
        ContentKind::RedOnly | ContentKind::GreenOnly => drawn,
        ContentKind::Mixed => return Err(DeductionError::ImpossibleDraw(drawn)),
    };
    debug!("\"{}\" machine must hold {}", Label::RedAndGreen, target);

    let mut resolved = vec![DeducedMachine { label: Label::RedAndGreen, kind: target }];
    let mut remaining = remove_kind(&ALL_KINDS, target);
    let mut pending: Vec<Label> = machines.iter()
        .map(|m| m.label)
        .filter(|&label| label != Label::RedAndGreen)
        .collect();

    while !pending.is_empty() {
        let mut deferred = Vec::new();

        for &label in &pending {
            let candidates = remove_kind(&remaining, label.naive_kind());
            match candidates.as_slice() {
                [] => return Err(DeductionError::Contradiction { label }),
                [kind] => {
                    debug!("\"{}\" machine must hold {}", label, kind);
                    remaining = remove_kind(&remaining, *kind);
                    resolved.push(DeducedMachine { label, kind: *kind });
                }
                _ => {
                    debug!("\"{}\" machine is still open: {:?}", label, candidates);
                    deferred.push(label);
                }
            }
        }

        if deferred.len() == pending.len() {
            let label = deferred[0];
            return Err(DeductionError::Ambiguous {
                label,
                candidates: remove_kind(&remaining, label.naive_kind()),
            });
        }
        pending = deferred;
    }

    Ok(Deduction { drawn, machines: resolved })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(deduction: &Deduction, label: Label) -> Option<ContentKind> {
        deduction.machines.iter()
            .find(|m| m.label == label)
            .map(|m| m.kind)
    }

    fn labelled_machines() -> Vec<Machine> {
        vec![
            Machine::new(Label::Red, ContentKind::GreenOnly),
            Machine::new(Label::RedAndGreen, ContentKind::RedOnly),
            Machine::new(Label::Green, ContentKind::Mixed),
        ]
    }

    #[test]
    fn test_deduce_red_draw() {
        let deduction = deduce(ContentKind::RedOnly, &labelled_machines())
            .expect("A red draw must be deducible");

        assert_eq!(deduction.machines[0], DeducedMachine { label: Label::RedAndGreen, kind: ContentKind::RedOnly });
        assert_eq!(kind_of(&deduction, Label::Green), Some(ContentKind::Mixed));
        assert_eq!(kind_of(&deduction, Label::Red), Some(ContentKind::GreenOnly));
        // "Red" only resolves once "Green" has taken mixed
        assert_eq!(deduction.machines[1].label, Label::Green);
        assert_eq!(deduction.drawn, ContentKind::RedOnly);
    }

    #[test]
    fn test_deduce_green_draw() {
        let deduction = deduce(ContentKind::GreenOnly, &labelled_machines())
            .expect("A green draw must be deducible");

        assert_eq!(kind_of(&deduction, Label::RedAndGreen), Some(ContentKind::GreenOnly));
        assert_eq!(kind_of(&deduction, Label::Red), Some(ContentKind::Mixed));
        assert_eq!(kind_of(&deduction, Label::Green), Some(ContentKind::RedOnly));
        assert_eq!(deduction.machines.len(), 3);
    }

    #[test]
    fn test_deduce_mixed_draw() {
        let err = deduce(ContentKind::Mixed, &labelled_machines())
            .expect_err("Mixed gum can never be drawn");

        assert_eq!(err, DeductionError::ImpossibleDraw(ContentKind::Mixed));
    }

    #[test]
    fn test_deduce_ambiguous() {
        let machines = [
            Machine::new(Label::RedAndGreen, ContentKind::RedOnly),
            Machine::new(Label::Red, ContentKind::GreenOnly),
            Machine::new(Label::Red, ContentKind::Mixed),
        ];

        if let DeductionError::Ambiguous { label, candidates } = deduce(ContentKind::RedOnly, &machines)
            .expect_err("Two red labels can't be told apart") {
            assert_eq!(label, Label::Red);
            assert_eq!(candidates, [ContentKind::GreenOnly, ContentKind::Mixed]);
        } else {
            panic!("Expected an ambiguous deduction");
        }
    }

    #[test]
    fn test_deduce_contradiction() {
        let machines = [
            Machine::new(Label::RedAndGreen, ContentKind::RedOnly),
            Machine::new(Label::Green, ContentKind::Mixed),
            Machine::new(Label::Green, ContentKind::GreenOnly),
        ];

        let err = deduce(ContentKind::RedOnly, &machines)
            .expect_err("The second \"Green\" machine has nothing left");
        assert_eq!(err, DeductionError::Contradiction { label: Label::Green });
    }

    #[test]
    fn test_display() {
        let deduction = deduce(ContentKind::GreenOnly, &labelled_machines())
            .expect("A green draw must be deducible");

        assert_eq!(deduction.to_string(),
                   "1. Machine \"Red and Green\" holds only green (label is wrong)\n\
                    2. Machine \"Red\" holds mixed (label is wrong)\n\
                    3. Machine \"Green\" holds only red (label is wrong)\n");
    }
}
