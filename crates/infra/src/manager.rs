//! The single owner of the live turtle.
//!
//! The host builds one `TurtleManager` with its store, clock and entropy, and
//! routes every command through it. Each mutation is persisted immediately;
//! a failed write is logged and the in-memory state is kept.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use turtcode_core::{Clock, EntropySource, RandEntropy, SystemClock};
use turtcode_turtle::{AccessoryError, Hat, TemperaturePreset, Turtle, Wardrobe};

use crate::config::ManagerConfig;
use crate::store::KeyValueStore;

#[derive(Debug)]
pub struct TurtleManager<S, C = SystemClock, E = RandEntropy> {
    turtle: Turtle,
    wardrobe: Wardrobe,
    store: S,
    clock: C,
    rng: E,
    config: ManagerConfig,
}

impl<S: KeyValueStore> TurtleManager<S> {
    /// Manager on wall-clock time and OS-seeded entropy.
    pub fn open(store: S, config: ManagerConfig) -> Self {
        Self::load_or_create(store, SystemClock, RandEntropy::from_os(), config)
    }
}

impl<S, C, E> TurtleManager<S, C, E>
where
    S: KeyValueStore,
    C: Clock,
    E: EntropySource,
{
    /// Restore the saved turtle (and hats), or hatch a new one, then save.
    ///
    /// An unreadable save is logged and replaced by a fresh turtle.
    pub fn load_or_create(store: S, clock: C, mut rng: E, config: ManagerConfig) -> Self {
        let turtle = load_turtle(&store, clock.now(), &mut rng, &config.save_key);
        let wardrobe = load_wardrobe(&store, &config.hats_key);

        let manager = Self {
            turtle,
            wardrobe,
            store,
            clock,
            rng,
            config,
        };
        manager.save_turtle();
        manager
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn age_in_days(&self) -> i64 {
        self.turtle.age_in_days(self.clock.now())
    }

    pub fn feed(&mut self) {
        self.turtle.feed();
        self.save_turtle();
    }

    pub fn give_water(&mut self) {
        self.turtle.give_water();
        self.save_turtle();
    }

    pub fn give_love(&mut self) {
        self.turtle.give_love();
        self.save_turtle();
    }

    pub fn clean(&mut self) {
        self.turtle.clean();
        self.save_turtle();
    }

    pub fn adjust_temperature(&mut self, value: i32) {
        self.turtle.adjust_temperature(value);
        self.save_turtle();
    }

    pub fn adjust_temperature_preset(&mut self, preset: TemperaturePreset) {
        self.turtle.apply_preset(preset);
        self.save_turtle();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.turtle.rename(name);
        self.save_turtle();
    }

    /// Unlock a random hat the player does not own yet.
    ///
    /// `None` means every hat is already unlocked.
    pub fn unlock_random_hat(&mut self) -> Option<Hat> {
        let hat = self.wardrobe.unlock_random(&mut self.rng)?;
        info!(%hat, "hat unlocked");
        self.save_wardrobe();
        Some(hat)
    }

    pub fn equip_hat(&mut self, hat: Hat) -> Result<(), AccessoryError> {
        self.wardrobe.equip(&mut self.turtle, hat)?;
        self.save_turtle();
        Ok(())
    }

    pub fn remove_hat(&mut self) {
        self.turtle.remove_hat();
        self.save_turtle();
    }

    /// One decay period. Called by the host's scheduler (see `NeedsUpdater`).
    pub fn tick(&mut self) {
        self.turtle.tick(&mut self.rng);
        debug!(
            turtle_id = %self.turtle.id_typed(),
            food = self.turtle.needs().food(),
            water = self.turtle.needs().water(),
            temperature = self.turtle.needs().temperature(),
            "needs decayed"
        );
        self.save_turtle();
    }

    /// Final save before the host shuts down.
    pub fn dispose(&mut self) {
        self.save_turtle();
        self.save_wardrobe();
    }

    fn save_turtle(&self) {
        let json = match self.turtle.to_json() {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to encode turtle");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.config.save_key, json) {
            error!(error = %err, key = %self.config.save_key, "failed to save turtle");
        }
    }

    fn save_wardrobe(&self) {
        let json = match self.wardrobe.to_json() {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to encode unlocked hats");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.config.hats_key, json) {
            error!(error = %err, key = %self.config.hats_key, "failed to save unlocked hats");
        }
    }
}

fn load_turtle(
    store: &impl KeyValueStore,
    now: DateTime<Utc>,
    rng: &mut impl EntropySource,
    key: &str,
) -> Turtle {
    let Some(saved) = store.get(key) else {
        let turtle = Turtle::new(now, rng);
        info!(turtle_id = %turtle.id_typed(), name = turtle.name(), "new turtle created");
        return turtle;
    };

    match Turtle::from_json(&saved, now, rng) {
        Ok(turtle) => {
            info!(turtle_id = %turtle.id_typed(), name = turtle.name(), "turtle loaded");
            turtle
        }
        Err(err) => {
            error!(error = %err, "failed to load turtle; hatching a new one");
            Turtle::new(now, rng)
        }
    }
}

fn load_wardrobe(store: &impl KeyValueStore, key: &str) -> Wardrobe {
    let Some(saved) = store.get(key) else {
        return Wardrobe::new();
    };

    Wardrobe::from_json(&saved).unwrap_or_else(|err| {
        error!(error = %err, "failed to load unlocked hats; starting empty");
        Wardrobe::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{Duration, TimeZone};
    use turtcode_core::ManualClock;

    use crate::config::DEFAULT_SAVE_KEY;
    use crate::store::{InMemoryStore, StoreError};

    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 9, 9, 0, 0).unwrap()
    }

    fn manager(
        store: Arc<InMemoryStore>,
    ) -> TurtleManager<Arc<InMemoryStore>, Arc<ManualClock>, RandEntropy> {
        let clock = Arc::new(ManualClock::new(start()));
        TurtleManager::load_or_create(store, clock, RandEntropy::seeded(31), ManagerConfig::default())
    }

    #[test]
    fn creating_saves_immediately() {
        let store = Arc::new(InMemoryStore::new());
        let manager = manager(store.clone());

        let saved = store.get(DEFAULT_SAVE_KEY).unwrap();
        let restored = Turtle::from_json(&saved, start(), &mut RandEntropy::seeded(0)).unwrap();
        assert_eq!(&restored, manager.turtle());
        assert_eq!(store.get(&manager.config().hats_key), None);
    }

    #[test]
    fn every_action_is_persisted() {
        let store = Arc::new(InMemoryStore::new());
        let mut manager = manager(store.clone());

        manager.feed();
        manager.give_water();
        manager.give_love();
        manager.clean();
        manager.adjust_temperature(64);
        manager.rename("Koopa");
        manager.tick();

        let saved = store.get(DEFAULT_SAVE_KEY).unwrap();
        let restored = Turtle::from_json(&saved, start(), &mut RandEntropy::seeded(0)).unwrap();
        assert_eq!(&restored, manager.turtle());
        assert_eq!(restored.name(), "Koopa");
    }

    #[test]
    fn store_failures_keep_in_memory_state() {
        let clock = ManualClock::new(start());
        let mut manager = TurtleManager::load_or_create(
            ReadOnlyStore,
            clock,
            RandEntropy::seeded(4),
            ManagerConfig::default(),
        );
        manager.feed();
        assert_eq!(manager.turtle().needs().food(), 100);
    }

    #[test]
    fn equip_requires_unlock_and_persists() {
        let store = Arc::new(InMemoryStore::new());
        let mut manager = manager(store.clone());

        let err = manager.equip_hat(Hat::Crown).unwrap_err();
        assert_eq!(err, AccessoryError::NotUnlocked(Hat::Crown));
        assert_eq!(manager.turtle().attributes().hat(), None);

        let hat = manager.unlock_random_hat().unwrap();
        manager.equip_hat(hat).unwrap();
        assert_eq!(manager.turtle().attributes().hat(), Some(hat));

        let hats = store.get(&manager.config().hats_key).unwrap();
        assert!(Wardrobe::from_json(&hats).unwrap().contains(hat));

        manager.remove_hat();
        assert_eq!(manager.turtle().attributes().hat(), None);
        // Removing the hat does not give up ownership.
        assert!(manager.wardrobe().contains(hat));
    }

    #[test]
    fn age_follows_the_clock() {
        let clock = Arc::new(ManualClock::new(start()));
        let manager = TurtleManager::load_or_create(
            InMemoryStore::new(),
            clock.clone(),
            RandEntropy::seeded(8),
            ManagerConfig::default(),
        );
        assert_eq!(manager.age_in_days(), 0);
        clock.advance(Duration::hours(36));
        assert_eq!(manager.age_in_days(), 1);
    }
}
