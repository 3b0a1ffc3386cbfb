//! Persistence codec.
//!
//! Saves are JSON with stable camelCase field names. Loading merges over a
//! freshly hatched turtle: anything missing, `null`, or not understood keeps the
//! fresh value, so a truncated save degrades instead of failing.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;
use turtcode_core::{EntropySource, TurtleId};

use crate::accessory::{Hat, Wardrobe};
use crate::attributes::Attributes;
use crate::catalog::{Color, EyeType, Gender, Horoscope, LifeStage, ShellRarity, ShellType, Size};
use crate::needs::Needs;
use crate::stats::{Stats, clamp_stat};
use crate::turtle::Turtle;

#[derive(Debug, Error)]
pub enum PersistError {
    /// The text is not a structurally valid save at all.
    #[error("malformed save data: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode save data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode a field, treating unreadable values like absent ones.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(err) => {
            warn!(%value, error = %err, "ignoring unreadable field in saved turtle");
            Ok(None)
        }
    }
}

/// Decode a numeric level. Any JSON number is accepted: fractions round to the
/// nearest integer and magnitudes beyond `i32` saturate, leaving the range
/// check to the caller's clamp.
fn lenient_level<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match value.as_f64() {
        // `as` saturates on overflow.
        Some(number) if number.is_finite() => Ok(Some(number.round() as i32)),
        _ => {
            warn!(%value, "ignoring non-numeric level in saved turtle");
            Ok(None)
        }
    }
}

/// Serialized form of a [`Turtle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurtleRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<TurtleId>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributesRecord>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub needs: Option<NeedsRecord>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributesRecord {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub shell_type: Option<ShellType>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub shell_rarity: Option<ShellRarity>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eye_type: Option<EyeType>,
    /// Stored as `age` for compatibility with existing saves.
    #[serde(
        rename = "age",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub life_stage: Option<LifeStage>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub horoscope: Option<Horoscope>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Always written, as `null` when bare-headed.
    #[serde(default, deserialize_with = "lenient")]
    pub hat: Option<Hat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedsRecord {
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub food: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub water: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub love: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub cleanliness: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub durability: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub stamina: Option<i32>,
    #[serde(default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub emotion: Option<i32>,
}

fn merge<T>(slot: &mut T, stored: Option<T>) {
    if let Some(value) = stored {
        *slot = value;
    }
}

impl Attributes {
    pub fn to_record(&self) -> AttributesRecord {
        AttributesRecord {
            shell_type: Some(self.shell_type),
            shell_rarity: Some(self.shell_rarity),
            color: Some(self.color),
            size: Some(self.size),
            eye_type: Some(self.eye_type),
            life_stage: Some(self.life_stage),
            horoscope: Some(self.horoscope),
            gender: Some(self.gender),
            name: Some(self.name.clone()),
            hat: self.hat,
        }
    }

    fn merge_record(&mut self, record: AttributesRecord, rng: &mut impl EntropySource) {
        merge(&mut self.shell_type, record.shell_type);
        merge(&mut self.shell_rarity, record.shell_rarity);
        merge(&mut self.color, record.color);
        merge(&mut self.size, record.size);
        merge(&mut self.eye_type, record.eye_type);
        merge(&mut self.life_stage, record.life_stage);
        merge(&mut self.horoscope, record.horoscope);
        merge(&mut self.gender, record.gender);

        match record.name {
            Some(name) => self.name = name,
            // Keep the fallback name consistent with a restored gender.
            None if record.gender.is_some() => self.name = self.gender.roll_name(rng),
            None => {}
        }

        if record.hat.is_some() {
            self.hat = record.hat;
        }
    }
}

impl Needs {
    pub fn to_record(&self) -> NeedsRecord {
        NeedsRecord {
            food: Some(self.food),
            water: Some(self.water),
            love: Some(self.love),
            cleanliness: Some(self.cleanliness),
            temperature: Some(self.temperature),
        }
    }

    fn merge_record(&mut self, record: NeedsRecord) {
        use crate::needs::{MAX_NEED, MIN_NEED};
        let clamp = |v: i32| v.clamp(MIN_NEED, MAX_NEED);

        merge(&mut self.food, record.food.map(clamp));
        merge(&mut self.water, record.water.map(clamp));
        merge(&mut self.love, record.love.map(clamp));
        merge(&mut self.cleanliness, record.cleanliness.map(clamp));
        // Drifted temperatures are legitimate state.
        merge(&mut self.temperature, record.temperature);
    }
}

impl Stats {
    pub fn to_record(&self) -> StatsRecord {
        StatsRecord {
            durability: Some(self.durability),
            strength: Some(self.strength),
            speed: Some(self.speed),
            stamina: Some(self.stamina),
            emotion: Some(self.emotion),
        }
    }

    fn merge_record(&mut self, record: StatsRecord) {
        merge(&mut self.durability, record.durability.map(clamp_stat));
        merge(&mut self.strength, record.strength.map(clamp_stat));
        merge(&mut self.speed, record.speed.map(clamp_stat));
        merge(&mut self.stamina, record.stamina.map(clamp_stat));
        merge(&mut self.emotion, record.emotion.map(clamp_stat));
    }
}

impl Turtle {
    pub fn to_persistable(&self) -> TurtleRecord {
        TurtleRecord {
            id: Some(self.id),
            created_at: Some(self.created_at),
            attributes: Some(self.attributes.to_record()),
            needs: Some(self.needs.to_record()),
            stats: Some(self.stats.to_record()),
        }
    }

    /// Rebuild a turtle from a record, merging over a freshly hatched one.
    ///
    /// `now` and `rng` are only used for whatever the record does not supply.
    pub fn from_persistable(
        record: TurtleRecord,
        now: DateTime<Utc>,
        rng: &mut impl EntropySource,
    ) -> Self {
        let mut turtle = Turtle::new(now, rng);

        merge(&mut turtle.id, record.id);
        merge(&mut turtle.created_at, record.created_at);
        if let Some(attributes) = record.attributes {
            turtle.attributes.merge_record(attributes, rng);
        }
        if let Some(needs) = record.needs {
            turtle.needs.merge_record(needs);
        }
        if let Some(stats) = record.stats {
            turtle.stats.merge_record(stats);
        }

        turtle
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(&self.to_persistable()).map_err(PersistError::Encode)
    }

    pub fn from_json(
        text: &str,
        now: DateTime<Utc>,
        rng: &mut impl EntropySource,
    ) -> Result<Self, PersistError> {
        let record: TurtleRecord = serde_json::from_str(text).map_err(PersistError::Malformed)?;
        Ok(Self::from_persistable(record, now, rng))
    }
}

impl Wardrobe {
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(PersistError::Encode)
    }

    /// Decode a flat list of hat ids. Unknown ids are skipped.
    pub fn from_json(text: &str) -> Result<Self, PersistError> {
        let ids: Vec<serde_json::Value> =
            serde_json::from_str(text).map_err(PersistError::Malformed)?;

        Ok(ids
            .into_iter()
            .filter_map(|id| match serde_json::from_value::<Hat>(id.clone()) {
                Ok(hat) => Some(hat),
                Err(err) => {
                    warn!(%id, error = %err, "skipping unknown hat in saved wardrobe");
                    None
                }
            })
            .collect())
    }
}
