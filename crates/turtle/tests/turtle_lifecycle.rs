//! End-to-end behaviour of a turtle through the public API: hatch, care,
//! neglect, save, restore.

use chrono::{DateTime, Duration, TimeZone, Utc};
use turtcode_core::{EntropySource, RandEntropy};
use turtcode_turtle::{
    CriticalNeed, Hat, Stat, TemperaturePreset, TemperatureStatus, Turtle, Wardrobe,
};

/// Rolls high, so the temperature walk always goes up.
struct Warming;

impl EntropySource for Warming {
    fn next_unit(&mut self) -> f64 {
        0.75
    }
}

fn hatched_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn a_week_of_neglect_then_recovery() {
    let mut rng = RandEntropy::seeded(2024);
    let mut turtle = Turtle::new(hatched_at(), &mut rng);

    // Ten-minute ticks for a few hours without care.
    for _ in 0..30 {
        turtle.tick(&mut rng);
    }
    assert_eq!(turtle.needs().food(), 0);
    assert_eq!(turtle.needs().water(), 0);
    assert_eq!(turtle.needs().cleanliness(), 0);
    assert_eq!(turtle.needs().critical_need(), Some(CriticalNeed::Hungry));
    assert!(turtle.stats().strength() < 50);
    assert_eq!(turtle.needs().food_status().label(), "Starving");

    let strength_before = turtle.stats().strength();
    turtle.feed();
    turtle.feed();
    turtle.feed();
    turtle.give_water();
    turtle.give_water();
    turtle.give_water();
    turtle.give_love();
    turtle.give_love();
    turtle.clean();
    turtle.apply_preset(TemperaturePreset::Perfect);

    assert_eq!(turtle.needs().food(), 90);
    assert_eq!(turtle.needs().water(), 100);
    assert_eq!(turtle.needs().cleanliness(), 100);
    assert_eq!(turtle.needs().temperature_status(), TemperatureStatus::Perfect);
    assert_eq!(turtle.stats().strength(), strength_before + 15);
    assert_eq!(turtle.needs().critical_need(), None);

    let week_later = hatched_at() + Duration::days(7) + Duration::hours(5);
    assert_eq!(turtle.age_in_days(week_later), 7);
}

#[test]
fn uncontrolled_warming_costs_durability() {
    let mut turtle = Turtle::new(hatched_at(), &mut RandEntropy::seeded(5));
    turtle.adjust_temperature(100);
    let durability = turtle.stats().durability();

    turtle.tick(&mut Warming);
    assert_eq!(turtle.needs().temperature(), 102);
    assert_eq!(turtle.needs().temperature_status(), TemperatureStatus::TooHot);
    assert_eq!(turtle.stats().get(Stat::Durability), durability - 2);
}

#[test]
fn hats_survive_a_save_cycle() {
    let mut rng = RandEntropy::seeded(10);
    let mut turtle = Turtle::new(hatched_at(), &mut rng);
    let mut wardrobe = Wardrobe::new();

    let hat = wardrobe.unlock_random(&mut rng).unwrap();
    wardrobe.equip(&mut turtle, hat).unwrap();

    let turtle_json = turtle.to_json().unwrap();
    let wardrobe_json = wardrobe.to_json().unwrap();

    let turtle = Turtle::from_json(&turtle_json, Utc::now(), &mut rng).unwrap();
    let wardrobe = Wardrobe::from_json(&wardrobe_json).unwrap();

    assert_eq!(turtle.attributes().hat(), Some(hat));
    assert!(wardrobe.contains(hat));
    assert_eq!(wardrobe.len(), 1);
    assert_eq!(wardrobe.locked().len(), Hat::ALL.len() - 1);
}
