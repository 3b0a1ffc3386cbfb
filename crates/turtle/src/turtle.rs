//! The `Turtle` aggregate: identity, attributes, needs and stats, plus the care actions.

use chrono::{DateTime, Utc};
use turtcode_core::{AggregateRoot, EntropySource, TurtleId};

use crate::accessory::Hat;
use crate::attributes::Attributes;
use crate::needs::{Need, Needs, OPTIMAL_TEMPERATURE, TEMPERATURE_TOLERANCE};
use crate::stats::{Stat, Stats};

pub const FEED_FOOD: i32 = 30;
pub const FEED_STRENGTH: i32 = 5;
pub const WATER_AMOUNT: i32 = 40;
pub const WATER_STAMINA: i32 = 5;
pub const LOVE_AMOUNT: i32 = 25;
pub const LOVE_SPEED: i32 = 5;
pub const CLEAN_EMOTION: i32 = 10;
pub const TEMPERATURE_DURABILITY: i32 = 5;

/// A need below this after decay costs its stat [`NEGLECT_PENALTY`] points.
pub const NEGLECT_THRESHOLD: i32 = 20;
pub const NEGLECT_PENALTY: i32 = 2;

/// Which stat suffers when a need is neglected.
const NEGLECT_RULES: [(Need, Stat); 4] = [
    (Need::Food, Stat::Strength),
    (Need::Water, Stat::Stamina),
    (Need::Love, Stat::Speed),
    (Need::Cleanliness, Stat::Emotion),
];

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

closed_enum! {
    /// Named temperature settings offered to the player.
    pub enum TemperaturePreset ("temperature preset") {
        TooCold => "Too Cold",
        Cold => "Cold",
        Perfect => "Perfect",
        Hot => "Hot",
        TooHot => "Too Hot",
    }
}

impl TemperaturePreset {
    /// Degrees Fahrenheit.
    pub fn degrees(self) -> i32 {
        match self {
            TemperaturePreset::TooCold => 60,
            TemperaturePreset::Cold => 70,
            TemperaturePreset::Perfect => OPTIMAL_TEMPERATURE,
            TemperaturePreset::Hot => 80,
            TemperaturePreset::TooHot => 90,
        }
    }
}

/// Aggregate root: Turtle.
///
/// Each care action changes exactly one need and one stat. Time only moves
/// through [`Turtle::tick`], which the host calls on its own schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turtle {
    pub(crate) id: TurtleId,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) attributes: Attributes,
    pub(crate) needs: Needs,
    pub(crate) stats: Stats,
}

impl Turtle {
    /// Hatch a new turtle with freshly rolled attributes and default needs/stats.
    pub fn new(created_at: DateTime<Utc>, rng: &mut impl EntropySource) -> Self {
        Self::with_id(TurtleId::new(), created_at, rng)
    }

    pub fn with_id(id: TurtleId, created_at: DateTime<Utc>, rng: &mut impl EntropySource) -> Self {
        Self {
            id,
            created_at,
            attributes: Attributes::roll(rng),
            needs: Needs::default(),
            stats: Stats::default(),
        }
    }

    pub fn id_typed(&self) -> TurtleId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn name(&self) -> &str {
        self.attributes.name()
    }

    /// Whole days since hatching. Never negative, even if `now` predates creation.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - self.created_at).num_seconds();
        elapsed.max(0).div_euclid(SECONDS_PER_DAY)
    }

    pub fn feed(&mut self) {
        self.needs.increase_food(FEED_FOOD);
        self.stats.increase(Stat::Strength, FEED_STRENGTH);
    }

    pub fn give_water(&mut self) {
        self.needs.increase_water(WATER_AMOUNT);
        self.stats.increase(Stat::Stamina, WATER_STAMINA);
    }

    pub fn give_love(&mut self) {
        self.needs.increase_love(LOVE_AMOUNT);
        self.stats.increase(Stat::Speed, LOVE_SPEED);
    }

    pub fn clean(&mut self) {
        self.needs.reset_cleanliness();
        self.stats.increase(Stat::Emotion, CLEAN_EMOTION);
    }

    /// Set the enclosure temperature (clamped to [50, 100]).
    pub fn adjust_temperature(&mut self, value: i32) {
        self.needs.set_temperature(value);
        self.stats.increase(Stat::Durability, TEMPERATURE_DURABILITY);
    }

    pub fn apply_preset(&mut self, preset: TemperaturePreset) {
        self.adjust_temperature(preset.degrees());
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.attributes.set_name(name);
    }

    pub fn set_hat(&mut self, hat: Hat) {
        self.attributes.set_hat(hat);
    }

    pub fn remove_hat(&mut self) {
        self.attributes.remove_hat();
    }

    /// One decay period: needs decay, then neglected needs cost stats.
    ///
    /// Penalties are checked against the post-decay needs and are independent,
    /// so a badly neglected turtle can lose several stats in one tick.
    pub fn tick(&mut self, rng: &mut impl EntropySource) {
        self.needs.decay(rng);

        for (need, stat) in NEGLECT_RULES {
            if self.needs.get(need) < NEGLECT_THRESHOLD {
                self.stats.decrease(stat, NEGLECT_PENALTY);
            }
        }

        if self.needs.temperature_deviation().abs() > TEMPERATURE_TOLERANCE {
            self.stats.decrease(Stat::Durability, NEGLECT_PENALTY);
        }
    }

    /// One-line status: the name, plus the most pressing need if there is one.
    pub fn summary(&self) -> String {
        match self.needs.critical_need() {
            Some(need) => format!("{}: {}", self.name(), need),
            None => self.name().to_string(),
        }
    }
}

impl AggregateRoot for Turtle {
    type Id = TurtleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
