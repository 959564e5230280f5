// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name-or-ID Lookup State Machine
//!
//! Pure transition function for the two-phase lookup. The resolver performs
//! the queries; this module only decides what happens next.
//!
//! # States
//!
//! - IdLookup: query with `id == candidate`
//! - NameLookup: query with `name == candidate`
//! - Found: exactly one match (terminal)
//! - NotFound: name lookup matched nothing (terminal)
//! - Ambiguous: name lookup matched more than once (terminal)
//!
//! # Transitions
//!
//! ```text
//! IdLookup   --Unique-->   Found
//! IdLookup   --Empty-->    NameLookup
//! IdLookup   --Multiple--> NameLookup
//! NameLookup --Unique-->   Found
//! NameLookup --Empty-->    NotFound
//! NameLookup --Multiple--> Ambiguous
//! ```

use crate::domain::{QueryFilters, RecordError, ResourceId, ResourceRecord};

/// Classification of one query's match set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Unique(ResourceId),
    Empty,
    Multiple(usize),
}

/// Classify a match set by its size
pub fn classify(matches: &[ResourceRecord]) -> Result<MatchOutcome, RecordError> {
    match matches {
        [] => Ok(MatchOutcome::Empty),
        [only] => Ok(MatchOutcome::Unique(ResourceId::new(only.id()?))),
        many => Ok(MatchOutcome::Multiple(many.len())),
    }
}

/// Position in the lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupPhase {
    IdLookup,
    NameLookup,
    Found(ResourceId),
    NotFound,
    Ambiguous(usize),
}

impl LookupPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LookupPhase::Found(_) | LookupPhase::NotFound | LookupPhase::Ambiguous(_)
        )
    }

    /// Filters to issue in this phase, `None` for terminal phases
    pub fn filters(&self, candidate: &str) -> Option<QueryFilters> {
        match self {
            LookupPhase::IdLookup => Some(QueryFilters::id_equals(candidate)),
            LookupPhase::NameLookup => Some(QueryFilters::name_equals(candidate)),
            _ => None,
        }
    }

    /// Next phase given the outcome of this phase's query
    ///
    /// Terminal phases are absorbing.
    pub fn advance(self, outcome: MatchOutcome) -> LookupPhase {
        use LookupPhase::*;
        use MatchOutcome::*;

        match (self, outcome) {
            (IdLookup, Unique(id)) => Found(id),
            (IdLookup, Empty) | (IdLookup, Multiple(_)) => NameLookup,

            (NameLookup, Unique(id)) => Found(id),
            (NameLookup, Empty) => NotFound,
            (NameLookup, Multiple(count)) => Ambiguous(count),

            (terminal, _) => terminal,
        }
    }
}
