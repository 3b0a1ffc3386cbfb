//! Cosmetic identity of a turtle, rolled once at creation.

use turtcode_core::EntropySource;

use crate::accessory::Hat;
use crate::catalog::{
    Color, EyeType, Gender, Horoscope, LifeStage, Rollable, ShellRarity, ShellType, Size,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    pub(crate) shell_type: ShellType,
    pub(crate) shell_rarity: ShellRarity,
    pub(crate) color: Color,
    pub(crate) size: Size,
    pub(crate) eye_type: EyeType,
    pub(crate) life_stage: LifeStage,
    pub(crate) horoscope: Horoscope,
    pub(crate) gender: Gender,
    pub(crate) name: String,
    pub(crate) hat: Option<Hat>,
}

impl Attributes {
    /// Roll every trait, then a name from the rolled gender's pool. No hat.
    pub fn roll(rng: &mut impl EntropySource) -> Self {
        let shell_type = ShellType::roll(rng);
        let shell_rarity = ShellRarity::roll(rng);
        let color = Color::roll(rng);
        let size = Size::roll(rng);
        let eye_type = EyeType::roll(rng);
        let life_stage = LifeStage::roll(rng);
        let horoscope = Horoscope::roll(rng);
        let gender = Gender::roll(rng);
        let name = gender.roll_name(rng);

        Self {
            shell_type,
            shell_rarity,
            color,
            size,
            eye_type,
            life_stage,
            horoscope,
            gender,
            name,
            hat: None,
        }
    }

    pub fn shell_type(&self) -> ShellType {
        self.shell_type
    }

    pub fn shell_rarity(&self) -> ShellRarity {
        self.shell_rarity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn eye_type(&self) -> EyeType {
        self.eye_type
    }

    pub fn life_stage(&self) -> LifeStage {
        self.life_stage
    }

    pub fn horoscope(&self) -> Horoscope {
        self.horoscope
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hat(&self) -> Option<Hat> {
        self.hat
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Equip without checking ownership; see `Wardrobe::equip` for the checked path.
    pub fn set_hat(&mut self, hat: Hat) {
        self.hat = Some(hat);
    }

    pub fn remove_hat(&mut self) {
        self.hat = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtcode_core::RandEntropy;

    #[test]
    fn same_seed_rolls_same_attributes() {
        let a = Attributes::roll(&mut RandEntropy::seeded(5));
        let b = Attributes::roll(&mut RandEntropy::seeded(5));
        assert_eq!(a, b);
    }

    #[test]
    fn fresh_roll_has_no_hat_and_a_gendered_name() {
        let mut rng = RandEntropy::seeded(17);
        for _ in 0..200 {
            let attrs = Attributes::roll(&mut rng);
            assert_eq!(attrs.hat(), None);
            assert!(attrs.gender().name_pool().contains(&attrs.name()));
        }
    }

    #[test]
    fn setters_do_not_validate() {
        let mut attrs = Attributes::roll(&mut RandEntropy::seeded(1));
        attrs.set_name("");
        assert_eq!(attrs.name(), "");
        attrs.set_name("  Sir Shellington III  ");
        assert_eq!(attrs.name(), "  Sir Shellington III  ");

        attrs.set_hat(Hat::Crown);
        assert_eq!(attrs.hat(), Some(Hat::Crown));
        attrs.remove_hat();
        assert_eq!(attrs.hat(), None);
    }
}
