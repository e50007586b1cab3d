//! Card Forge - Janet card definition generator
//!
//! This library merges named card templates with overrides and writes the
//! result as Janet source files that the game loads as card definitions.
//!
//! # Example
//!
//! ```rust
//! use card_forge::{render_card, Overrides, TemplateRegistry};
//!
//! let registry = TemplateRegistry::builtin();
//! let source = render_card(&registry, "ranged_unit", &Overrides::new().cost(3)).unwrap();
//! assert!(source.starts_with("(def cost 3)"));
//! ```

pub mod card;
pub mod command;
pub mod error;
pub mod interactive;
pub mod random;
pub mod renderer;
pub mod template;

pub use card::{merge, CardData, Event, Overrides, Value};
pub use command::Command;
pub use error::GenerateError;
pub use renderer::{GeneratorConfig, EMPTY_COLLECTION};
pub use template::{Template, TemplateRegistry};

use std::path::{Path, PathBuf};

use rand::Rng;

/// Look up a template and merge overrides onto it
pub fn card_data(
    registry: &TemplateRegistry,
    template_name: &str,
    overrides: &Overrides,
) -> Result<CardData, GenerateError> {
    match registry.get(template_name) {
        Some(template) => Ok(merge(template, overrides)),
        None => {
            tracing::debug!(event = "template_missing", template = %template_name);
            Err(GenerateError::TemplateNotFound {
                name: template_name.to_string(),
            })
        }
    }
}

/// Merge and render a card to Janet source without writing it
pub fn render_card(
    registry: &TemplateRegistry,
    template_name: &str,
    overrides: &Overrides,
) -> Result<String, GenerateError> {
    let card = card_data(registry, template_name, overrides)?;
    Ok(renderer::render(&card))
}

/// Generates card files from a template registry.
///
/// # Example
///
/// ```rust,no_run
/// use card_forge::{Generator, GeneratorConfig, Overrides, TemplateRegistry};
///
/// let generator = Generator::new(TemplateRegistry::builtin(), GeneratorConfig::default());
/// let path = generator
///     .generate("Fire Mage", "ranged_unit", &Overrides::new().cost(3).attack_strength(2).defense(1))
///     .unwrap();
/// assert!(path.ends_with("fire_mage.janet"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    registry: TemplateRegistry,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(registry: TemplateRegistry, config: GeneratorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Merge, render, and write one card. Returns the written path.
    ///
    /// Nothing is written when the template does not exist.
    pub fn generate(
        &self,
        name: &str,
        template_name: &str,
        overrides: &Overrides,
    ) -> Result<PathBuf, GenerateError> {
        let card = card_data(&self.registry, template_name, overrides)?;
        let lines = renderer::render_lines(&card);
        renderer::write_card(name, &lines, &self.config)
    }

    /// Generate a card from a random template with random stats.
    ///
    /// A two-word name is made up when `name` is `None`.
    pub fn generate_random<R: Rng>(
        &self,
        name: Option<String>,
        rng: &mut R,
    ) -> Result<PathBuf, GenerateError> {
        let sampled =
            random::sample(&self.registry, name, rng).ok_or(GenerateError::EmptyRegistry)?;
        self.generate(&sampled.name, &sampled.template.name, &sampled.overrides)
    }

    /// Generate `count` random cards, stopping at the first failure.
    ///
    /// `on_card` sees each path as soon as its file is written.
    pub fn generate_batch<R, F>(
        &self,
        count: usize,
        rng: &mut R,
        mut on_card: F,
    ) -> Result<Vec<PathBuf>, GenerateError>
    where
        R: Rng,
        F: FnMut(&Path),
    {
        let mut paths = Vec::with_capacity(count);
        for _ in 0..count {
            let path = self.generate_random(None, rng)?;
            on_card(&path);
            paths.push(path);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_card_unknown_template() {
        let registry = TemplateRegistry::builtin();
        let err = render_card(&registry, "bogus_template", &Overrides::new()).unwrap_err();
        assert!(err.is_template_not_found());
    }

    #[test]
    fn test_render_card_applies_overrides() {
        let registry = TemplateRegistry::builtin();
        let source = render_card(
            &registry,
            "heavy_unit",
            &Overrides::new().attack_strength(9),
        )
        .unwrap();
        assert!(source.contains("(def attack-strength 9)\n"));
        assert!(source.contains("(def defense 3)\n"));
    }

    #[test]
    fn test_card_data_matches_merge() {
        let registry = TemplateRegistry::builtin();
        let overrides = Overrides::new().cost(5);
        let data = card_data(&registry, "structure", &overrides).unwrap();
        assert_eq!(data, merge(registry.get("structure").unwrap(), &overrides));
    }

    #[test]
    fn test_generate_batch_reports_each_card() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(
            TemplateRegistry::builtin(),
            GeneratorConfig::new().with_output_dir(dir.path()),
        );
        let mut seen = Vec::new();
        let paths = generator
            .generate_batch(4, &mut StdRng::seed_from_u64(8), |p| {
                seen.push(p.to_path_buf())
            })
            .unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(seen, paths);
    }
}
