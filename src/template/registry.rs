//! Template registry for storing and retrieving card templates

/// Image path shared by every built-in template
pub const DEFAULT_CARD_IMAGE: &str = "assets/default.png";

/// A named set of default card field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template name
    pub name: String,
    pub cost: i64,
    /// Movement pattern code fragment
    pub movement: String,
    /// Attack pattern code fragment
    pub attack: String,
    pub movement_points: i64,
    pub attack_strength: i64,
    pub defense: i64,
    /// Ability names, in order
    pub abilities: Vec<String>,
    /// Path of the card artwork
    pub card_image: String,
}

impl Template {
    fn builtin(
        name: &str,
        cost: i64,
        movement: &str,
        attack: &str,
        (movement_points, attack_strength, defense): (i64, i64, i64),
        abilities: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            cost,
            movement: movement.to_string(),
            attack: attack.to_string(),
            movement_points,
            attack_strength,
            defense,
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
            card_image: DEFAULT_CARD_IMAGE.to_string(),
        }
    }
}

/// Immutable, ordered collection of templates.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// The five built-in templates
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template::builtin(
                    "basic_unit",
                    2,
                    "(std/plus 1)",
                    "(std/plus 1)",
                    (2, 2, 2),
                    &[],
                ),
                Template::builtin(
                    "ranged_unit",
                    2,
                    "(std/plus 1)",
                    "(array/join (std/plus 1) (std/plus 2))",
                    (2, 2, 1),
                    &[],
                ),
                Template::builtin(
                    "heavy_unit",
                    3,
                    "(std/plus 1)",
                    "(std/plus 1)",
                    (1, 3, 3),
                    &[],
                ),
                Template::builtin(
                    "support_unit",
                    2,
                    "(std/plus 1)",
                    "@[]",
                    (2, 0, 2),
                    &["heal"],
                ),
                Template::builtin("structure", 1, "@[]", "(std/cross 2)", (0, 2, 3), &[]),
            ],
        }
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Template names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// All templates, in registry order
    pub fn as_slice(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The listing printed by the `templates` command
    pub fn listing(&self) -> String {
        let mut out = String::from("Available templates:\n");
        for name in self.names() {
            out.push_str("  - ");
            out.push_str(name);
            out.push('\n');
        }
        out
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
