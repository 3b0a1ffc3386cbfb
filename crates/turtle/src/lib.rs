//! Turtle simulation model.
//!
//! Deterministic given its entropy source: attribute rolls, needs decay, the
//! neglect rule that links needs to stats, and the persistence codec. No IO,
//! no timers; the host drives time by calling [`Turtle::tick`].

#[macro_use]
mod macros;

pub mod accessory;
pub mod attributes;
pub mod catalog;
pub mod codec;
pub mod needs;
pub mod stats;
pub mod turtle;

pub use accessory::{AccessoryError, Hat, Wardrobe};
pub use attributes::Attributes;
pub use catalog::{
    Color, EyeType, Gender, Horoscope, LifeStage, Rollable, ShellRarity, ShellType, Size,
};
pub use codec::{AttributesRecord, NeedsRecord, PersistError, StatsRecord, TurtleRecord};
pub use needs::{CriticalNeed, Need, NeedStatus, NeedTier, Needs, TemperatureStatus};
pub use stats::{Stat, StatLevel, StatTier, Stats};
pub use turtle::{TemperaturePreset, Turtle};
