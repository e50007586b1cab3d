//! Random card sampling
//!
//! All sampling goes through a caller-provided [`Rng`], so a seeded
//! generator reproduces the same cards.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Overrides;
use crate::template::{Template, TemplateRegistry};

pub const COST_RANGE: RangeInclusive<i64> = 1..=5;
pub const ATTACK_STRENGTH_RANGE: RangeInclusive<i64> = 1..=4;
pub const DEFENSE_RANGE: RangeInclusive<i64> = 1..=3;
pub const MOVEMENT_POINTS_RANGE: RangeInclusive<i64> = 0..=3;

pub const NAME_PREFIXES: [&str; 10] = [
    "Ancient", "Dark", "Light", "Fire", "Ice", "Storm", "Shadow", "Blood", "Iron", "Stone",
];

pub const NAME_SUFFIXES: [&str; 9] = [
    "Warrior", "Mage", "Knight", "Archer", "Guardian", "Beast", "Dragon", "Spirit", "Golem",
];

/// A sampled card request: name, template, and randomized stats
#[derive(Debug, Clone)]
pub struct RandomCard<'a> {
    pub name: String,
    pub template: &'a Template,
    pub overrides: Overrides,
}

/// Two-word name, one prefix and one suffix
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or(NAME_PREFIXES[0]);
    let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or(NAME_SUFFIXES[0]);
    format!("{} {}", prefix, suffix)
}

/// Overrides for cost, attack strength, defense, and movement points
pub fn random_stats<R: Rng>(rng: &mut R) -> Overrides {
    Overrides::new()
        .cost(rng.gen_range(COST_RANGE))
        .attack_strength(rng.gen_range(ATTACK_STRENGTH_RANGE))
        .defense(rng.gen_range(DEFENSE_RANGE))
        .movement_points(rng.gen_range(MOVEMENT_POINTS_RANGE))
}

/// Sample a template uniformly plus random stats.
///
/// Returns `None` only for an empty registry.
pub fn sample<'a, R: Rng>(
    registry: &'a TemplateRegistry,
    name: Option<String>,
    rng: &mut R,
) -> Option<RandomCard<'a>> {
    let name = name.unwrap_or_else(|| random_name(rng));
    let template = registry.as_slice().choose(rng)?;
    let overrides = random_stats(rng);

    tracing::debug!(
        event = "random_card_sampled",
        name = %name,
        template = %template.name
    );

    Some(RandomCard {
        name,
        template,
        overrides,
    })
}
