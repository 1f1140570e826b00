//! Event payloads passed to [`super::NetworkEventHandler`].

use std::fmt;

use crate::models::{LinkKind, Node};

/// The derivation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
    Links,
    Mit,
    Mitp,
    Mpid,
    MpidSet,
    Cit,
    Bundled,
}

impl Derivation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Mit => "mit",
            Self::Mitp => "mitp",
            Self::Mpid => "mpid",
            Self::MpidSet => "mpid_set",
            Self::Cit => "cit",
            Self::Bundled => "bundled",
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source does not reach the target the way a derivation needs.
///
/// `link` is [`LinkKind::Unlinked`] when there is no path at all, or
/// [`LinkKind::Directed`] when the only path is the direct edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMissingEvent {
    pub derivation: Derivation,
    pub source: Node,
    pub target: Node,
    pub link: LinkKind,
}

/// An unlinked source was removed from a multi-source derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDroppedEvent {
    pub derivation: Derivation,
    pub source: Node,
    pub target: Node,
}

/// A condition set was derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionsDerivedEvent {
    pub derivation: Derivation,
    pub target: Node,
    pub conditions: usize,
}

/// The weighted transitive reduction pruned a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgesPrunedEvent {
    pub candidates: usize,
    pub retained: usize,
    pub removed_edges: usize,
}
