//! In-flight request tracking for save and generate actions

use crate::dataset::RecordId;

/// Actions that issue a network request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SaveDescription,
    SaveLink,
    Generate,
}

impl ActionKind {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            ActionKind::SaveDescription => 0,
            ActionKind::SaveLink => 1,
            ActionKind::Generate => 2,
        }
    }
}

/// Proof that a request was admitted by the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightToken {
    kind: ActionKind,
    seq: u64,
    record: RecordId,
}

impl FlightToken {
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn record(&self) -> RecordId {
        self.record
    }
}

/// At most one in-flight request per action kind.
///
/// A second `begin` for a busy kind is refused. A completion whose token
/// is no longer the current one (cancelled, or superseded) is stale and
/// must be ignored by the caller.
#[derive(Debug, Default)]
pub struct FlightGuard {
    next_seq: u64,
    in_flight: [Option<u64>; ActionKind::COUNT],
}

impl FlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, kind: ActionKind, record: RecordId) -> Option<FlightToken> {
        let slot = &mut self.in_flight[kind.slot()];
        if slot.is_some() {
            return None;
        }
        self.next_seq += 1;
        *slot = Some(self.next_seq);
        Some(FlightToken {
            kind,
            seq: self.next_seq,
            record,
        })
    }

    /// Settle a request; `false` means the token is stale
    pub fn finish(&mut self, token: &FlightToken) -> bool {
        let slot = &mut self.in_flight[token.kind.slot()];
        if *slot == Some(token.seq) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self, kind: ActionKind) -> bool {
        self.in_flight[kind.slot()].is_some()
    }

    /// Forget every in-flight request; their completions become stale
    pub fn cancel_all(&mut self) {
        self.in_flight = [None; ActionKind::COUNT];
    }
}
