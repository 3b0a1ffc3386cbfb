//! Cosmetic trait catalog: closed enumerations and their roll weights.
//!
//! The weight tables are configuration data. Changing a weight changes how
//! likely new turtles are to get a trait, never what an existing save means.

use turtcode_core::{EntropySource, Weighted, weighted_choice};

/// A categorical trait that can be rolled from a weight table.
pub trait Rollable: Copy + PartialEq + 'static {
    const ALL: &'static [Self];
    const WEIGHTS: &'static [Weighted<Self>];

    fn roll(rng: &mut impl EntropySource) -> Self {
        weighted_choice(Self::ALL, Self::WEIGHTS, rng).unwrap_or(Self::ALL[0])
    }
}

macro_rules! rollable {
    ($name:ident { $( $variant:ident : $weight:expr ),+ $(,)? }) => {
        impl Rollable for $name {
            const ALL: &'static [Self] = $name::ALL;
            const WEIGHTS: &'static [Weighted<Self>] = &[
                $( Weighted::new($name::$variant, $weight) ),+
            ];
        }
    };
}

closed_enum! {
    pub enum ShellType ("shell type") {
        Classic => "Classic",
        Spiked => "Spiked",
        Smooth => "Smooth",
        Patterned => "Patterned",
        Crystal => "Crystal",
        Ancient => "Ancient",
        Fossil => "Fossil",
        Hardened => "Hardened",
        Glowing => "Glowing",
        Metallic => "Metallic",
        Golden => "Golden",
        Ruby => "Ruby",
        Emerald => "Emerald",
        Sapphire => "Sapphire",
        Diamond => "Diamond",
    }
}

rollable!(ShellType {
    Classic: 40.0,
    Spiked: 20.0,
    Smooth: 20.0,
    Patterned: 10.0,
    Crystal: 3.0,
    Ancient: 2.0,
    Fossil: 2.0,
    Hardened: 1.0,
    Glowing: 1.0,
    Metallic: 0.5,
    Golden: 0.3,
    Ruby: 0.1,
    Emerald: 0.05,
    Sapphire: 0.03,
    Diamond: 0.02,
});

closed_enum! {
    pub enum ShellRarity ("shell rarity") {
        Common => "Common",
        Uncommon => "Uncommon",
        Rare => "Rare",
        Epic => "Epic",
        Legendary => "Legendary",
    }
}

rollable!(ShellRarity {
    Common: 60.0,
    Uncommon: 25.0,
    Rare: 10.0,
    Epic: 4.0,
    Legendary: 1.0,
});

closed_enum! {
    pub enum Color ("color") {
        Green => "Green",
        Brown => "Brown",
        Olive => "Olive",
        Gray => "Gray",
        Blue => "Blue",
        Red => "Red",
        Purple => "Purple",
        Yellow => "Yellow",
        Orange => "Orange",
        Pink => "Pink",
        Teal => "Teal",
        Turquoise => "Turquoise",
        Gold => "Gold",
        Silver => "Silver",
        Rainbow => "Rainbow",
    }
}

rollable!(Color {
    Green: 30.0,
    Brown: 30.0,
    Olive: 20.0,
    Gray: 10.0,
    Blue: 5.0,
    Red: 2.0,
    Purple: 1.0,
    Yellow: 1.0,
    Orange: 0.5,
    Pink: 0.3,
    Teal: 0.1,
    Turquoise: 0.05,
    Gold: 0.03,
    Silver: 0.02,
    Rainbow: 0.01,
});

closed_enum! {
    pub enum Size ("size") {
        Tiny => "Tiny",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
        Giant => "Giant",
    }
}

rollable!(Size {
    Tiny: 10.0,
    Small: 25.0,
    Medium: 40.0,
    Large: 20.0,
    Giant: 5.0,
});

closed_enum! {
    pub enum EyeType ("eye type") {
        Black => "Black",
        Blue => "Blue",
        Green => "Green",
        Brown => "Brown",
        Yellow => "Yellow",
        Red => "Red",
        Purple => "Purple",
        Heterochromia => "Heterochromia",
        Glowing => "Glowing",
        StarShaped => "Star-shaped",
    }
}

rollable!(EyeType {
    Black: 40.0,
    Blue: 20.0,
    Green: 15.0,
    Brown: 15.0,
    Yellow: 5.0,
    Red: 2.0,
    Purple: 1.0,
    Heterochromia: 1.0,
    Glowing: 0.9,
    StarShaped: 0.1,
});

closed_enum! {
    /// Cosmetic age category, rolled once. Unrelated to the real age in days.
    pub enum LifeStage ("life stage") {
        Baby => "Baby",
        Young => "Young",
        Adult => "Adult",
        Elder => "Elder",
    }
}

rollable!(LifeStage {
    Baby: 20.0,
    Young: 30.0,
    Adult: 40.0,
    Elder: 10.0,
});

closed_enum! {
    pub enum Horoscope ("horoscope") {
        Aries => "Aries",
        Taurus => "Taurus",
        Gemini => "Gemini",
        Cancer => "Cancer",
        Leo => "Leo",
        Virgo => "Virgo",
        Libra => "Libra",
        Scorpio => "Scorpio",
        Sagittarius => "Sagittarius",
        Capricorn => "Capricorn",
        Aquarius => "Aquarius",
        Pisces => "Pisces",
    }
}

rollable!(Horoscope {
    Aries: 1.0,
    Taurus: 1.0,
    Gemini: 1.0,
    Cancer: 1.0,
    Leo: 1.0,
    Virgo: 1.0,
    Libra: 1.0,
    Scorpio: 1.0,
    Sagittarius: 1.0,
    Capricorn: 1.0,
    Aquarius: 1.0,
    Pisces: 1.0,
});

closed_enum! {
    pub enum Gender ("gender") {
        Male => "Male",
        Female => "Female",
        NonBinary => "Non-binary",
    }
}

rollable!(Gender {
    Male: 45.0,
    Female: 45.0,
    NonBinary: 10.0,
});

const MALE_NAMES: &[&str] = &[
    "Sheldon", "Rocky", "Crush", "Leonardo", "Donatello", "Raphael", "Michelangelo",
    "Squirtle", "Franklin", "Bowser", "Koopa", "Speedy", "Flash", "Tank", "Rex", "Gus",
];

const FEMALE_NAMES: &[&str] = &[
    "Shelly", "Penelope", "Daphne", "Marina", "Coral", "Pearl", "Jade", "Terra", "Luna",
    "Emerald", "Nova", "Venus", "Gem", "Pebbles", "Harmony",
];

const NON_BINARY_NAMES: &[&str] = &[
    "Ripple", "Shell", "River", "Ocean", "Pebble", "Reef", "Storm", "Ziggy", "Echo", "Sage",
    "Taylor", "Journey", "Wren", "Riley", "Casey",
];

impl Gender {
    /// Default names for turtles of this gender. The pools are disjoint.
    pub fn name_pool(self) -> &'static [&'static str] {
        match self {
            Gender::Male => MALE_NAMES,
            Gender::Female => FEMALE_NAMES,
            Gender::NonBinary => NON_BINARY_NAMES,
        }
    }

    /// Uniform pick from this gender's pool.
    pub fn roll_name(self, rng: &mut impl EntropySource) -> String {
        turtcode_core::uniform_choice(self.name_pool(), rng)
            .copied()
            .unwrap_or("Turtle")
            .to_string()
    }
}
