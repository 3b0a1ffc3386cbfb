//! Needs: five bounded accumulators that decay over time and are refilled by care.

use turtcode_core::EntropySource;

pub const MIN_NEED: i32 = 0;
pub const MAX_NEED: i32 = 100;
pub const MIN_TEMPERATURE: i32 = 50;
pub const MAX_TEMPERATURE: i32 = 100;
/// Degrees Fahrenheit.
pub const OPTIMAL_TEMPERATURE: i32 = 75;

/// Per-tick natural decay.
pub const FOOD_DECAY: i32 = 5;
pub const WATER_DECAY: i32 = 7;
pub const LOVE_DECAY: i32 = 3;
pub const CLEANLINESS_DECAY: i32 = 10;
/// Magnitude of the per-tick temperature random walk.
pub const TEMPERATURE_DRIFT: i32 = 2;

/// Below this a need shows up as the turtle's critical need.
const CRITICAL_BELOW: i32 = 30;
/// Beyond this deviation from the optimum the temperature is uncomfortable.
pub const TEMPERATURE_TOLERANCE: i32 = 15;
const PERFECT_TOLERANCE: i32 = 5;

/// The refillable needs (temperature is set, not refilled).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Need {
    Food,
    Water,
    Love,
    Cleanliness,
}

impl Need {
    pub const ALL: [Need; 4] = [Need::Food, Need::Water, Need::Love, Need::Cleanliness];
}

/// Ordered status bucket shared by the refillable needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NeedTier {
    Critical,
    Low,
    Fair,
    High,
}

impl NeedTier {
    fn of(value: i32) -> Self {
        if value > 80 {
            NeedTier::High
        } else if value > 50 {
            NeedTier::Fair
        } else if value > 20 {
            NeedTier::Low
        } else {
            NeedTier::Critical
        }
    }
}

/// Status label for one need, e.g. food at 60 is "Satisfied".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NeedStatus {
    pub need: Need,
    pub tier: NeedTier,
}

impl NeedStatus {
    pub fn label(&self) -> &'static str {
        use NeedTier::*;
        match (self.need, self.tier) {
            (Need::Food, High) => "Full",
            (Need::Food, Fair) => "Satisfied",
            (Need::Food, Low) => "Hungry",
            (Need::Food, Critical) => "Starving",
            (Need::Water, High) => "Hydrated",
            (Need::Water, Fair) => "Content",
            (Need::Water, Low) => "Thirsty",
            (Need::Water, Critical) => "Dehydrated",
            (Need::Love, High) => "Adored",
            (Need::Love, Fair) => "Happy",
            (Need::Love, Low) => "Lonely",
            (Need::Love, Critical) => "Depressed",
            (Need::Cleanliness, High) => "Spotless",
            (Need::Cleanliness, Fair) => "Clean",
            (Need::Cleanliness, Low) => "Dirty",
            (Need::Cleanliness, Critical) => "Filthy",
        }
    }
}

impl core::fmt::Display for NeedStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

closed_enum! {
    /// Temperature relative to the optimum.
    pub enum TemperatureStatus ("temperature status") {
        TooCold => "Too Cold",
        Cold => "Cold",
        Perfect => "Perfect",
        Hot => "Hot",
        TooHot => "Too Hot",
    }
}

impl TemperatureStatus {
    pub fn of(temperature: i32) -> Self {
        let delta = temperature.saturating_sub(OPTIMAL_TEMPERATURE);
        if delta.abs() <= PERFECT_TOLERANCE {
            TemperatureStatus::Perfect
        } else if delta < -TEMPERATURE_TOLERANCE {
            TemperatureStatus::TooCold
        } else if delta < 0 {
            TemperatureStatus::Cold
        } else if delta > TEMPERATURE_TOLERANCE {
            TemperatureStatus::TooHot
        } else {
            TemperatureStatus::Hot
        }
    }
}

closed_enum! {
    /// The most pressing problem, for one-line summaries.
    pub enum CriticalNeed ("critical need") {
        Hungry => "Hungry",
        Thirsty => "Thirsty",
        Dirty => "Dirty",
        Lonely => "Lonely",
        Cold => "Cold",
        Hot => "Hot",
    }
}

/// The turtle's needs.
///
/// Refillable needs stay in `[0, 100]`. Temperature is clamped to `[50, 100]`
/// when set directly, but the decay walk does not re-clamp it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needs {
    pub(crate) food: i32,
    pub(crate) water: i32,
    pub(crate) love: i32,
    pub(crate) cleanliness: i32,
    pub(crate) temperature: i32,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            food: 70,
            water: 70,
            love: 70,
            cleanliness: MAX_NEED,
            temperature: OPTIMAL_TEMPERATURE,
        }
    }
}

fn clamp_need(value: i32) -> i32 {
    value.clamp(MIN_NEED, MAX_NEED)
}

impl Needs {
    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn water(&self) -> i32 {
        self.water
    }

    pub fn love(&self) -> i32 {
        self.love
    }

    pub fn cleanliness(&self) -> i32 {
        self.cleanliness
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn get(&self, need: Need) -> i32 {
        match need {
            Need::Food => self.food,
            Need::Water => self.water,
            Need::Love => self.love,
            Need::Cleanliness => self.cleanliness,
        }
    }

    fn slot(&mut self, need: Need) -> &mut i32 {
        match need {
            Need::Food => &mut self.food,
            Need::Water => &mut self.water,
            Need::Love => &mut self.love,
            Need::Cleanliness => &mut self.cleanliness,
        }
    }

    /// Add `amount`, saturating at the bounds.
    pub fn increase(&mut self, need: Need, amount: i32) {
        let slot = self.slot(need);
        *slot = clamp_need(slot.saturating_add(amount));
    }

    pub fn increase_food(&mut self, amount: i32) {
        self.increase(Need::Food, amount);
    }

    pub fn increase_water(&mut self, amount: i32) {
        self.increase(Need::Water, amount);
    }

    pub fn increase_love(&mut self, amount: i32) {
        self.increase(Need::Love, amount);
    }

    pub fn reset_cleanliness(&mut self) {
        self.cleanliness = MAX_NEED;
    }

    pub fn set_temperature(&mut self, value: i32) {
        self.temperature = value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    }

    /// One period of natural decay.
    pub fn decay(&mut self, rng: &mut impl EntropySource) {
        self.food = clamp_need(self.food.saturating_sub(FOOD_DECAY));
        self.water = clamp_need(self.water.saturating_sub(WATER_DECAY));
        self.love = clamp_need(self.love.saturating_sub(LOVE_DECAY));
        self.cleanliness = clamp_need(self.cleanliness.saturating_sub(CLEANLINESS_DECAY));

        // Only `set_temperature` clamps; the walk may leave [50, 100].
        let drift = if rng.next_unit() > 0.5 {
            TEMPERATURE_DRIFT
        } else {
            -TEMPERATURE_DRIFT
        };
        self.temperature = self.temperature.saturating_add(drift);
    }

    /// Signed distance from the optimal temperature.
    pub fn temperature_deviation(&self) -> i32 {
        self.temperature.saturating_sub(OPTIMAL_TEMPERATURE)
    }

    pub fn status(&self, need: Need) -> NeedStatus {
        NeedStatus {
            need,
            tier: NeedTier::of(self.get(need)),
        }
    }

    pub fn food_status(&self) -> NeedStatus {
        self.status(Need::Food)
    }

    pub fn water_status(&self) -> NeedStatus {
        self.status(Need::Water)
    }

    pub fn love_status(&self) -> NeedStatus {
        self.status(Need::Love)
    }

    pub fn cleanliness_status(&self) -> NeedStatus {
        self.status(Need::Cleanliness)
    }

    pub fn temperature_status(&self) -> TemperatureStatus {
        TemperatureStatus::of(self.temperature)
    }

    /// First pressing problem in priority order: food, water, cleanliness, love, temperature.
    pub fn critical_need(&self) -> Option<CriticalNeed> {
        if self.food < CRITICAL_BELOW {
            Some(CriticalNeed::Hungry)
        } else if self.water < CRITICAL_BELOW {
            Some(CriticalNeed::Thirsty)
        } else if self.cleanliness < CRITICAL_BELOW {
            Some(CriticalNeed::Dirty)
        } else if self.love < CRITICAL_BELOW {
            Some(CriticalNeed::Lonely)
        } else if self.temperature_deviation().abs() > TEMPERATURE_TOLERANCE {
            if self.temperature < OPTIMAL_TEMPERATURE {
                Some(CriticalNeed::Cold)
            } else {
                Some(CriticalNeed::Hot)
            }
        } else {
            None
        }
    }
}
