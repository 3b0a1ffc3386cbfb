//! Stats: five bounded accumulators driven by care actions and neglect.

pub const MIN_STAT: i32 = 1;
pub const MAX_STAT: i32 = 100;
pub const DEFAULT_STAT: i32 = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stat {
    Durability,
    Strength,
    Speed,
    Stamina,
    Emotion,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Durability,
        Stat::Strength,
        Stat::Speed,
        Stat::Stamina,
        Stat::Emotion,
    ];

    /// Labels from lowest to highest bucket.
    fn vocabulary(self) -> [&'static str; 5] {
        match self {
            Stat::Durability => ["Terrible", "Poor", "Average", "Good", "Excellent"],
            Stat::Strength => ["Frail", "Weak", "Average", "Strong", "Mighty"],
            Stat::Speed => ["Crawling", "Slow", "Average", "Swift", "Speedy"],
            Stat::Stamina => ["Exhausted", "Tired", "Average", "Energetic", "Tireless"],
            Stat::Emotion => ["Miserable", "Sad", "Content", "Happy", "Blissful"],
        }
    }
}

/// Five ordered buckets with thresholds at 20/40/60/80.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatTier {
    Lowest,
    Low,
    Middle,
    High,
    Highest,
}

impl StatTier {
    fn of(value: i32) -> Self {
        if value > 80 {
            StatTier::Highest
        } else if value > 60 {
            StatTier::High
        } else if value > 40 {
            StatTier::Middle
        } else if value > 20 {
            StatTier::Low
        } else {
            StatTier::Lowest
        }
    }
}

/// Level label for one stat, e.g. strength at 90 is "Mighty".
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatLevel {
    pub stat: Stat,
    pub tier: StatTier,
}

impl StatLevel {
    pub fn label(&self) -> &'static str {
        self.stat.vocabulary()[self.tier as usize]
    }
}

impl core::fmt::Display for StatLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// The turtle's stats. Every field stays in `[1, 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub(crate) durability: i32,
    pub(crate) strength: i32,
    pub(crate) speed: i32,
    pub(crate) stamina: i32,
    pub(crate) emotion: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            durability: DEFAULT_STAT,
            strength: DEFAULT_STAT,
            speed: DEFAULT_STAT,
            stamina: DEFAULT_STAT,
            emotion: DEFAULT_STAT,
        }
    }
}

pub(crate) fn clamp_stat(value: i32) -> i32 {
    value.clamp(MIN_STAT, MAX_STAT)
}

impl Stats {
    pub fn durability(&self) -> i32 {
        self.durability
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn stamina(&self) -> i32 {
        self.stamina
    }

    pub fn emotion(&self) -> i32 {
        self.emotion
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Durability => self.durability,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Stamina => self.stamina,
            Stat::Emotion => self.emotion,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Durability => &mut self.durability,
            Stat::Strength => &mut self.strength,
            Stat::Speed => &mut self.speed,
            Stat::Stamina => &mut self.stamina,
            Stat::Emotion => &mut self.emotion,
        }
    }

    pub fn increase(&mut self, stat: Stat, amount: i32) {
        let slot = self.slot(stat);
        *slot = clamp_stat(slot.saturating_add(amount));
    }

    pub fn decrease(&mut self, stat: Stat, amount: i32) {
        let slot = self.slot(stat);
        *slot = clamp_stat(slot.saturating_sub(amount));
    }

    pub fn level(&self, stat: Stat) -> StatLevel {
        StatLevel {
            stat,
            tier: StatTier::of(self.get(stat)),
        }
    }

    pub fn durability_level(&self) -> StatLevel {
        self.level(Stat::Durability)
    }

    pub fn strength_level(&self) -> StatLevel {
        self.level(Stat::Strength)
    }

    pub fn speed_level(&self) -> StatLevel {
        self.level(Stat::Speed)
    }

    pub fn stamina_level(&self) -> StatLevel {
        self.level(Stat::Stamina)
    }

    pub fn emotion_level(&self) -> StatLevel {
        self.level(Stat::Emotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floor_is_one_not_zero() {
        let mut stats = Stats::default();
        stats.decrease(Stat::Strength, 500);
        assert_eq!(stats.strength(), 1);
        stats.decrease(Stat::Strength, 2);
        assert_eq!(stats.strength(), 1);
    }

    #[test]
    fn ceiling_is_one_hundred() {
        let mut stats = Stats::default();
        stats.increase(Stat::Emotion, 60);
        assert_eq!(stats.emotion(), 100);
    }

    #[test]
    fn level_vocabulary_per_stat() {
        let mut stats = Stats::default();
        assert_eq!(stats.strength_level().label(), "Average");
        assert_eq!(stats.emotion_level().label(), "Content");

        stats.increase(Stat::Strength, 31);
        assert_eq!(stats.strength_level().label(), "Mighty");
        stats.decrease(Stat::Speed, 30);
        assert_eq!(stats.speed_level().label(), "Slow");
        stats.decrease(Stat::Stamina, 49);
        assert_eq!(stats.stamina_level().label(), "Exhausted");
        stats.increase(Stat::Durability, 11);
        assert_eq!(stats.durability_level().to_string(), "Good");
    }

    #[test]
    fn tier_boundaries() {
        for (value, tier) in [
            (1, StatTier::Lowest),
            (20, StatTier::Lowest),
            (21, StatTier::Low),
            (40, StatTier::Low),
            (41, StatTier::Middle),
            (60, StatTier::Middle),
            (61, StatTier::High),
            (80, StatTier::High),
            (81, StatTier::Highest),
            (100, StatTier::Highest),
        ] {
            assert_eq!(StatTier::of(value), tier, "value = {value}");
        }
    }

    proptest! {
        #[test]
        fn stats_stay_in_bounds(
            ops in prop::collection::vec((0usize..5, any::<i32>(), any::<bool>()), 0..64)
        ) {
            let mut stats = Stats::default();
            for (idx, amount, up) in ops {
                let stat = Stat::ALL[idx];
                if up {
                    stats.increase(stat, amount);
                } else {
                    stats.decrease(stat, amount);
                }
                for stat in Stat::ALL {
                    prop_assert!((MIN_STAT..=MAX_STAT).contains(&stats.get(stat)));
                }
            }
        }
    }
}
