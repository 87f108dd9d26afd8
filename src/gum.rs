use std::fmt;

pub const MACHINES_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    RedOnly,
    GreenOnly,
    Mixed,
}

pub const ALL_KINDS: [ContentKind; MACHINES_COUNT] = [
    ContentKind::RedOnly,
    ContentKind::GreenOnly,
    ContentKind::Mixed,
];

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ContentKind::RedOnly => "only red",
            ContentKind::GreenOnly => "only green",
            ContentKind::Mixed => "mixed",
        };
        f.pad(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Red,
    Green,
    RedAndGreen,
}

impl Label {
    // The kind a machine would hold if its sticker told the truth.
    pub fn naive_kind(self) -> ContentKind {
        match self {
            Label::Red => ContentKind::RedOnly,
            Label::Green => ContentKind::GreenOnly,
            Label::RedAndGreen => ContentKind::Mixed,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Label::Red => "Red",
            Label::Green => "Green",
            Label::RedAndGreen => "Red and Green",
        };
        f.pad(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    pub label: Label,
    pub actual: ContentKind,
}

impl Machine {
    pub fn new(label: Label, actual: ContentKind) -> Machine {
        Machine { label, actual }
    }

    pub fn is_mislabelled(&self) -> bool {
        self.actual != self.label.naive_kind()
    }
}

pub fn remove_kind(kinds: &[ContentKind], kind: ContentKind) -> Vec<ContentKind> {
    kinds.iter()
        .copied()
        .filter(|&k| k != kind)
        .collect()
}
