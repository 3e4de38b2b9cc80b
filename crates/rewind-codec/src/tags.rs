//! Wire tag constants for the integer-keyed container.
//!
//! JSON object keys are strings, so the integer tags appear as their
//! decimal string forms. Tags `"0"` and `"1"` are common to every
//! entry; per-variant payload tags start at `"2"`. The same numeral can
//! mean different things under different entry types — the entry-type
//! tag disambiguates.

/// Common entry tags.
pub mod entry {
    /// Entry type discriminant.
    pub const ENTRY_TYPE: &str = "0";
    /// Owning actor id.
    pub const ACTOR_ID: &str = "1";
}

/// Nested position object tags.
pub mod position {
    /// X component.
    pub const X: &str = "0";
    /// Y component.
    pub const Y: &str = "1";
    /// Z component.
    pub const Z: &str = "2";
}

/// Nested rotation object tags.
pub mod rotation {
    /// Yaw in degrees.
    pub const YAW: &str = "0";
    /// Pitch in degrees.
    pub const PITCH: &str = "1";
}

/// Transform entry payload tags.
pub mod transform {
    /// Target position (nested object).
    pub const POSITION: &str = "2";
    /// Target rotation (nested object).
    pub const ROTATION: &str = "3";
    /// Movement state.
    pub const STATE: &str = "4";
    /// Movement speed.
    pub const SPEED: &str = "5";
    /// Teleport flag.
    pub const TELEPORT: &str = "6";
}

/// Take-damage entry payload tags.
pub mod take_damage {
    /// Damage amount.
    pub const DAMAGE: &str = "2";
    /// Damage cause.
    pub const CAUSE: &str = "3";
}

/// Regain-health entry payload tags.
pub mod regain_health {
    /// Amount regained.
    pub const AMOUNT: &str = "2";
    /// Regain reason.
    pub const REASON: &str = "3";
}

/// Animation entry payload tags.
pub mod animation {
    /// Animation kind.
    pub const ANIMATION: &str = "2";
    /// Duration in ticks.
    pub const DURATION: &str = "3";
}

/// Block place/break entry payload tags.
pub mod block {
    /// Block position (nested object).
    pub const POSITION: &str = "2";
    /// Placed block id (place only).
    pub const BLOCK_ID: &str = "3";
    /// Placed block metadata (place only).
    pub const BLOCK_META: &str = "4";
}

/// Chest interaction entry payload tags.
pub mod chest {
    /// Chest block position (nested object).
    pub const POSITION: &str = "2";
    /// Open/close action.
    pub const ACTION: &str = "3";
}

/// Inventory edit entry payload tags.
pub mod inventory_edit {
    /// Inventory discriminant.
    pub const INVENTORY: &str = "2";
    /// Slot index.
    pub const SLOT: &str = "3";
    /// Host-serialized item.
    pub const ITEM: &str = "4";
}

/// Spawn-state entry payload tags.
pub mod spawn_state {
    /// Spawned flag.
    pub const SPAWNED: &str = "2";
    /// Keep-inventory flag.
    pub const KEEP_INVENTORY: &str = "3";
}

/// Effect entry payload tags.
pub mod effect {
    /// Host effect id.
    pub const EFFECT_ID: &str = "2";
    /// Amplifier level.
    pub const AMPLIFIER: &str = "3";
    /// Duration in ticks.
    pub const DURATION: &str = "4";
    /// Add/remove flag.
    pub const ADD: &str = "5";
}

/// Client snapshot tags.
pub mod client {
    /// Actor id.
    pub const ACTOR_ID: &str = "0";
    /// Starting position (nested object).
    pub const POSITION: &str = "1";
    /// Starting rotation (nested object).
    pub const ROTATION: &str = "2";
    /// Skin descriptor (nested object).
    pub const SKIN: &str = "3";
    /// Display-name override.
    pub const DISPLAY_NAME: &str = "4";
}

/// Nested skin descriptor tags.
pub mod skin {
    /// Host skin identifier.
    pub const ID: &str = "0";
    /// Primary image bytes, base64.
    pub const DATA: &str = "1";
    /// Cape image bytes, base64.
    pub const CAPE: &str = "2";
    /// Geometry model name.
    pub const GEOMETRY_NAME: &str = "3";
    /// Geometry definition bytes, base64.
    pub const GEOMETRY_DATA: &str = "4";
}

/// Top-level container section tags.
pub mod section {
    /// Tick-indexed entry lists.
    pub const TICKS: &str = "0";
    /// Client snapshot list.
    pub const CLIENTS: &str = "1";
}
