//! Typed commands built from raw command-line tokens
//!
//! Tokens are interpreted once here; the binary only dispatches on the
//! resulting [`Command`].

use crate::card::Overrides;

/// Count used by `random` when none is given
pub const DEFAULT_RANDOM_COUNT: usize = 1;

/// Count used by `batch` when none is given
pub const DEFAULT_BATCH_COUNT: usize = 5;

/// A fully interpreted invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate one card from a template
    Generate {
        name: String,
        template: String,
        cost: Option<i64>,
        attack_strength: Option<i64>,
        defense: Option<i64>,
    },
    /// `generate` without a name and template
    GenerateUsage,
    /// Generate `count` random cards
    Random { count: usize },
    /// Generate a batch of random cards, announced up front
    Batch { count: usize },
    /// List the available templates
    Templates,
    /// Prompt for each field interactively
    Custom,
    /// No or unrecognized command
    Help,
}

impl Command {
    /// Interpret raw tokens, the first being the command name
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let arg = |i: usize| args.get(i).map(|s| s.as_ref());

        match arg(0) {
            Some("generate") | Some("gen") => match (arg(1), arg(2)) {
                (Some(name), Some(template)) => Command::Generate {
                    name: name.to_string(),
                    template: template.to_string(),
                    cost: arg(3).map(coerce_int),
                    attack_strength: arg(4).map(coerce_int),
                    defense: arg(5).map(coerce_int),
                },
                _ => Command::GenerateUsage,
            },
            Some("random") | Some("rand") => Command::Random {
                count: arg(1).map(coerce_count).unwrap_or(DEFAULT_RANDOM_COUNT),
            },
            Some("batch") => Command::Batch {
                count: arg(1).map(coerce_count).unwrap_or(DEFAULT_BATCH_COUNT),
            },
            Some("templates") | Some("list") => Command::Templates,
            Some("custom") => Command::Custom,
            _ => Command::Help,
        }
    }

    /// Stat overrides carried by a `Generate` command
    pub fn overrides(&self) -> Overrides {
        match self {
            Command::Generate {
                cost,
                attack_strength,
                defense,
                ..
            } => stat_overrides(*cost, *attack_strength, *defense),
            _ => Overrides::new(),
        }
    }
}

/// Overrides for whichever of cost, attack strength, and defense are given
pub fn stat_overrides(
    cost: Option<i64>,
    attack_strength: Option<i64>,
    defense: Option<i64>,
) -> Overrides {
    let mut overrides = Overrides::new();
    if let Some(cost) = cost {
        overrides = overrides.cost(cost);
    }
    if let Some(attack_strength) = attack_strength {
        overrides = overrides.attack_strength(attack_strength);
    }
    if let Some(defense) = defense {
        overrides = overrides.defense(defense);
    }
    overrides
}

/// Lenient integer parse: the leading integer of the input, or 0.
///
/// Leading whitespace and a sign are accepted, trailing garbage is ignored,
/// and out-of-range values saturate.
pub fn coerce_int(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }
    value
}

fn coerce_count(input: &str) -> usize {
    usize::try_from(coerce_int(input)).unwrap_or(0)
}
