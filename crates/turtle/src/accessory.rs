//! Hats and the set of hats the player has unlocked.
//!
//! Ownership lives here, outside the `Turtle` aggregate: the turtle only records
//! which hat it is wearing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use turtcode_core::{EntropySource, uniform_choice};

use crate::turtle::Turtle;

closed_enum! {
    /// The hat catalogue. Labels are the stable identifiers used in saves and asset names.
    pub enum Hat ("hat") {
        TopHat => "tophat",
        Crown => "crown",
        Beanie => "beanie",
        Cowboy => "cowboy",
        Party => "party",
        Wizard => "wizard",
        Pirate => "pirate",
        Chef => "chef",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessoryError {
    #[error("hat {0} has not been unlocked")]
    NotUnlocked(Hat),
}

/// Unlocked hats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wardrobe {
    unlocked: BTreeSet<Hat>,
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hat: Hat) -> bool {
        self.unlocked.contains(&hat)
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    /// All hats owned, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = Hat> + '_ {
        self.unlocked.iter().copied()
    }

    /// Hats still to be unlocked, in catalogue order.
    pub fn locked(&self) -> Vec<Hat> {
        Hat::ALL
            .iter()
            .copied()
            .filter(|hat| !self.unlocked.contains(hat))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unlocked.len() == Hat::ALL.len()
    }

    /// Unlock one hat not yet owned, uniformly at random.
    ///
    /// Returns `None` once every hat is owned.
    pub fn unlock_random(&mut self, rng: &mut impl EntropySource) -> Option<Hat> {
        let locked = self.locked();
        let hat = *uniform_choice(&locked, rng)?;
        self.unlocked.insert(hat);
        Some(hat)
    }

    /// Put `hat` on `turtle` if it has been unlocked; otherwise leave the turtle untouched.
    pub fn equip(&self, turtle: &mut Turtle, hat: Hat) -> Result<(), AccessoryError> {
        if !self.contains(hat) {
            return Err(AccessoryError::NotUnlocked(hat));
        }
        turtle.set_hat(hat);
        Ok(())
    }
}

impl FromIterator<Hat> for Wardrobe {
    fn from_iter<I: IntoIterator<Item = Hat>>(iter: I) -> Self {
        Self {
            unlocked: iter.into_iter().collect(),
        }
    }
}
