/// The direction a cross-domain message travels in.
///
/// Fixed for the lifetime of an orchestration run. The direction decides
/// which chain is searched for the message's origin and which one for its
/// delivery.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Deposit: sent on L1, delivered on L2 by the sequencer.
    L1ToL2,
    /// Withdrawal: sent on L2, relayed to L1 with an inclusion proof.
    L2ToL1,
}

impl Direction {
    /// True if messages in this direction must be submitted to the
    /// destination messenger by a relayer. L1 to L2 messages are delivered by
    /// the sequencer and only need to be observed.
    pub const fn requires_relay(&self) -> bool {
        matches!(self, Self::L2ToL1)
    }

    /// The opposite direction.
    pub const fn reverse(&self) -> Self {
        match self {
            Self::L1ToL2 => Self::L2ToL1,
            Self::L2ToL1 => Self::L1ToL2,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::L1ToL2 => f.write_str("L1 -> L2"),
            Self::L2ToL1 => f.write_str("L2 -> L1"),
        }
    }
}
