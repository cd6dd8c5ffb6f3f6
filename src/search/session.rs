// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session lifecycle.
//!
//! A session owns the loaded index and moves through exactly one path:
//! `Uninitialized → Loading → Ready`. The index loads at most once —
//! [`SearchSession::begin_load`] only succeeds from `Uninitialized`, so a
//! second caller can never re-issue the fetch. Searches arriving before the
//! session is ready are dropped, not queued: the caller re-issues a search on
//! every keystroke anyway, so the next one lands once the index is in.
//!
//! A failed load leaves the session in `Loading` forever. There is no retry;
//! the session simply never answers.

use crate::types::{IndexedDocument, SearchIndexArtifact, SearchReply};

use super::search_by_keyphrase;

/// Observable lifecycle state of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
}

enum State {
    Uninitialized,
    Loading,
    Ready(Vec<IndexedDocument>),
}

/// A single search session over a once-loaded, immutable index.
pub struct SearchSession {
    state: State,
}

impl SearchSession {
    pub fn new() -> Self {
        SearchSession {
            state: State::Uninitialized,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.state {
            State::Uninitialized => SessionState::Uninitialized,
            State::Loading => SessionState::Loading,
            State::Ready(_) => SessionState::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Claim the one-time load. Returns `true` only on the first call, from
    /// `Uninitialized`; every later call is a no-op returning `false`.
    pub fn begin_load(&mut self) -> bool {
        match self.state {
            State::Uninitialized => {
                self.state = State::Loading;
                true
            }
            State::Loading | State::Ready(_) => false,
        }
    }

    /// Install the fetched artifact. Only meaningful in `Loading`; any other
    /// state ignores the artifact, preserving the load-once invariant.
    pub fn finish_load(&mut self, artifact: SearchIndexArtifact) {
        if matches!(self.state, State::Loading) {
            self.state = State::Ready(artifact.search_index);
        }
    }

    /// The loaded documents, if the session is ready.
    pub fn documents(&self) -> Option<&[IndexedDocument]> {
        match &self.state {
            State::Ready(documents) => Some(documents),
            _ => None,
        }
    }

    /// Run a search, or drop it (`None`) if the index is not loaded yet.
    pub fn search(&self, keyphrase: &str) -> Option<SearchReply> {
        match &self.state {
            State::Ready(documents) => Some(search_by_keyphrase(documents, keyphrase)),
            State::Uninitialized | State::Loading => None,
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        SearchSession::new()
    }
}
