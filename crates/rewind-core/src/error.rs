//! Error types for entry construction.

use std::fmt;

/// An entry could not be constructed from the supplied values.
///
/// Raised when a raw discriminant falls outside its declared range or a
/// field violates a structural constraint. Construction aborts; nothing
/// is ever clamped into range. At capture time the caller drops the one
/// offending event; at decode time `rewind-codec` escalates this to a
/// malformed-entry failure for the whole batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryError {
    /// The entry type tag is not one of the known discriminants.
    InvalidEntryKind {
        /// The unrecognized tag value.
        value: u64,
    },
    /// The movement state is outside the declared range.
    InvalidMovementState {
        /// The out-of-range raw value.
        value: u64,
    },
    /// The damage cause is outside the declared range.
    InvalidDamageCause {
        /// The out-of-range raw value.
        value: u64,
    },
    /// The health-regain reason is outside the declared range.
    InvalidRegainReason {
        /// The out-of-range raw value.
        value: u64,
    },
    /// The animation is not one of the known kinds.
    InvalidAnimation {
        /// The out-of-range raw value.
        value: u64,
    },
    /// The inventory discriminant is not base or armor.
    InvalidInventory {
        /// The out-of-range raw value.
        value: u64,
    },
    /// The chest action is not open or close.
    InvalidChestAction {
        /// The out-of-range raw value.
        value: u64,
    },
    /// An armor inventory edit targets a slot the armor inventory
    /// does not have.
    ArmorSlotOutOfRange {
        /// The offending slot index.
        slot: u32,
    },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntryKind { value } => write!(f, "unknown entry type tag {value}"),
            Self::InvalidMovementState { value } => {
                write!(f, "movement state {value} out of range")
            }
            Self::InvalidDamageCause { value } => write!(f, "damage cause {value} out of range"),
            Self::InvalidRegainReason { value } => {
                write!(f, "health-regain reason {value} out of range")
            }
            Self::InvalidAnimation { value } => write!(f, "animation {value} out of range"),
            Self::InvalidInventory { value } => write!(f, "inventory id {value} out of range"),
            Self::InvalidChestAction { value } => write!(f, "chest action {value} out of range"),
            Self::ArmorSlotOutOfRange { slot } => {
                write!(f, "armor inventory has no slot {slot}")
            }
        }
    }
}

impl std::error::Error for EntryError {}
