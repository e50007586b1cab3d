//! Card data: field values, overrides, and the template merge

use std::collections::HashMap;
use std::fmt;

use crate::template::Template;

/// Field names recognized by the renderer
pub mod field {
    pub const COST: &str = "cost";
    pub const MOVEMENT: &str = "movement";
    pub const ATTACK: &str = "attack";
    pub const MOVEMENT_POINTS: &str = "movement-points";
    pub const ATTACK_STRENGTH: &str = "attack-strength";
    pub const DEFENSE: &str = "defense";
    pub const ABILITIES: &str = "abilities";
    pub const CARD_IMAGE: &str = "card-image";
}

/// A single field value.
///
/// Code fragments (movement, attack, event handlers) are opaque `Text` and
/// are never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// True for empty text and empty lists
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Int(_) => false,
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Display form used wherever a value is interpolated into a definition
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => write!(f, "@[{}]", items.join(" ")),
        }
    }
}

/// In-game trigger slots, rendered in `Event::ALL` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Draw,
    Play,
    Discard,
    Ability,
    TurnBegin,
    TurnEnd,
}

impl Event {
    pub const ALL: [Event; 6] = [
        Event::Draw,
        Event::Play,
        Event::Discard,
        Event::Ability,
        Event::TurnBegin,
        Event::TurnEnd,
    ];

    /// The field name of this event slot
    pub fn key(self) -> &'static str {
        match self {
            Event::Draw => "on-draw",
            Event::Play => "on-play",
            Event::Discard => "on-discard",
            Event::Ability => "on-ability",
            Event::TurnBegin => "on-turn-begin",
            Event::TurnEnd => "on-turn-end",
        }
    }
}

/// Caller-supplied replacements for template defaults.
///
/// Keys are not validated: anything the renderer does not know is carried
/// along and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    entries: Vec<(String, Value)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary key, replacing an earlier value for the same key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn cost(self, cost: i64) -> Self {
        self.set(field::COST, cost)
    }

    pub fn attack_strength(self, attack_strength: i64) -> Self {
        self.set(field::ATTACK_STRENGTH, attack_strength)
    }

    pub fn defense(self, defense: i64) -> Self {
        self.set(field::DEFENSE, defense)
    }

    pub fn movement_points(self, movement_points: i64) -> Self {
        self.set(field::MOVEMENT_POINTS, movement_points)
    }

    /// Attach a handler to an event slot
    pub fn event(self, event: Event, handler: impl Into<Value>) -> Self {
        self.set(event.key(), handler)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The merged, renderable record for a single card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardData {
    fields: HashMap<String, Value>,
}

impl CardData {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn event(&self, event: Event) -> Option<&Value> {
        self.get(event.key())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&Template> for CardData {
    fn from(template: &Template) -> Self {
        let fields = [
            (field::COST, Value::Int(template.cost)),
            (field::MOVEMENT, Value::text(&template.movement)),
            (field::ATTACK, Value::text(&template.attack)),
            (field::MOVEMENT_POINTS, Value::Int(template.movement_points)),
            (field::ATTACK_STRENGTH, Value::Int(template.attack_strength)),
            (field::DEFENSE, Value::Int(template.defense)),
            (field::ABILITIES, Value::List(template.abilities.clone())),
            (field::CARD_IMAGE, Value::text(&template.card_image)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self { fields }
    }
}

/// Shallow right-biased merge: every override key replaces the template value
pub fn merge(template: &Template, overrides: &Overrides) -> CardData {
    let mut card = CardData::from(template);
    for (key, value) in overrides.iter() {
        card.fields.insert(key.to_string(), value.clone());
    }
    tracing::debug!(
        event = "card_merged",
        template = %template.name,
        overrides = overrides.len()
    );
    card
}
