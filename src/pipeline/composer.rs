use crate::llm::GenerationParams;
use crate::search::CitationStyle;

pub const ECONOMIC_MARKER: &str = "Refutación austríaca/liberal:";
pub const PHILOSOPHICAL_MARKER: &str = "Refutación filosófica:";

/// The four entry flavors. One pipeline, parameterized here: prompt template,
/// qualifier mode, section marker, sampling temperature, search domain hint
/// and citation rendering all hang off the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// One terse dictionary definition per selected Austrian author.
    ByAuthor,
    /// Definition of a socialist/Marxist term plus an economic refutation.
    EconomicRefutation,
    /// Same, but the critique must reach beyond economics into ethics,
    /// politics and rival philosophical schools.
    PhilosophicalRefutation,
    /// One longer, reference-rich definition with no qualifier.
    Extended,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::ByAuthor => "by-author",
            Variant::EconomicRefutation => "economic-refutation",
            Variant::PhilosophicalRefutation => "philosophical-refutation",
            Variant::Extended => "extended",
        }
    }

    /// Marker the generated text is split on, for the dual-section variants.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Variant::EconomicRefutation => Some(ECONOMIC_MARKER),
            Variant::PhilosophicalRefutation => Some(PHILOSOPHICAL_MARKER),
            Variant::ByAuthor | Variant::Extended => None,
        }
    }

    /// Terse variants run at temperature 0; the extended entry gets room to
    /// elaborate.
    pub fn params(&self) -> GenerationParams {
        match self {
            Variant::Extended => GenerationParams::with_temperature(0.7),
            _ => GenerationParams::default(),
        }
    }

    pub fn domain_hint(&self) -> &'static str {
        match self {
            Variant::ByAuthor => "Escuela Austríaca economía",
            Variant::EconomicRefutation | Variant::PhilosophicalRefutation => {
                "socialismo marxismo"
            }
            Variant::Extended => "Austrian School of Economics",
        }
    }

    pub fn citation_style(&self) -> CitationStyle {
        match self {
            Variant::ByAuthor => CitationStyle::TitledLink,
            Variant::EconomicRefutation | Variant::PhilosophicalRefutation => {
                CitationStyle::BareUrl
            }
            Variant::Extended => CitationStyle::Bibliographic,
        }
    }

    /// Bound on cited sources, applied per qualifier. Context assembly is
    /// never bounded.
    pub fn citation_limit(&self) -> Option<usize> {
        match self {
            Variant::ByAuthor => Some(3),
            _ => None,
        }
    }

    pub fn compose(&self, term: &str, qualifier: Option<&str>, context: &str) -> String {
        match self {
            Variant::ByAuthor => {
                let author = qualifier.unwrap_or_default();
                format!(
                    "Contexto: {context}\n\nTérmino: {term}\nAutor: {author}\n\n\
                     Proporciona una definición del término económico '{term}' según el \
                     pensamiento de {author}, un autor de la Escuela Austríaca de Economía. \
                     La definición debe ser concisa pero informativa, similar a una entrada \
                     de diccionario. Si es posible, incluye una referencia a una obra \
                     específica de {author} que trate este concepto.\n\nDefinición:"
                )
            }
            Variant::EconomicRefutation => format!(
                "Contexto: {context}\n\nTérmino: {term}\n\n\
                 1. Proporciona una definición concisa pero informativa del término o tesis \
                 socialista/marxista '{term}', similar a una entrada de diccionario.\n\n\
                 2. Luego, proporciona una refutación o crítica desde la perspectiva de la \
                 Escuela Austríaca de Economía o el pensamiento liberal. La refutación debe \
                 ser clara, fundamentada y basada en los principios de la economía de libre \
                 mercado.\n\nDefinición:\n\n{ECONOMIC_MARKER}"
            ),
            Variant::PhilosophicalRefutation => format!(
                "Contexto: {context}\n\nTérmino: {term}\n\n\
                 1. Proporciona una definición concisa pero informativa del término o tesis \
                 socialista/marxista '{term}', similar a una entrada de diccionario.\n\n\
                 2. Luego, proporciona una refutación o crítica que aborde las dimensiones \
                 éticas, políticas y filosóficas del término, apoyándose en escuelas de \
                 pensamiento alternativas y no únicamente en argumentos económicos.\n\n\
                 Definición:\n\n{PHILOSOPHICAL_MARKER}"
            ),
            Variant::Extended => format!(
                "Contexto: {context}\n\nTérmino: {term}\n\n\
                 Proporciona una definición del término económico '{term}' según la visión \
                 de la escuela austríaca de economía. La definición debe ser más larga, \
                 detallada, e informativa, similar a una entrada de diccionario extendida. \
                 Incluye referencias a fuentes específicas que traten este concepto.\n\n\
                 Definición:"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_author_prompt_carries_term_author_and_context() {
        let prompt = Variant::ByAuthor.compose("Interés", Some("Ludwig von Mises"), "S1\nS2");
        assert!(prompt.starts_with("Contexto: S1\nS2\n\nTérmino: Interés\nAutor: Ludwig von Mises"));
        assert!(prompt.contains("según el pensamiento de Ludwig von Mises"));
        assert!(prompt.ends_with("Definición:"));
    }

    #[test]
    fn dual_section_prompts_end_with_their_marker() {
        let econ = Variant::EconomicRefutation.compose("Plusvalía", None, "ctx");
        assert!(econ.ends_with(ECONOMIC_MARKER));
        let phil = Variant::PhilosophicalRefutation.compose("Plusvalía", None, "ctx");
        assert!(phil.ends_with(PHILOSOPHICAL_MARKER));
        assert!(phil.contains("dimensiones éticas, políticas y filosóficas"));
    }

    #[test]
    fn only_dual_section_variants_have_a_marker() {
        assert!(Variant::ByAuthor.marker().is_none());
        assert!(Variant::Extended.marker().is_none());
        assert_eq!(Variant::EconomicRefutation.marker(), Some(ECONOMIC_MARKER));
        assert_eq!(Variant::PhilosophicalRefutation.marker(), Some(PHILOSOPHICAL_MARKER));
    }

    #[test]
    fn extended_variant_raises_temperature_only() {
        assert_eq!(Variant::ByAuthor.params().temperature, 0.0);
        assert_eq!(Variant::Extended.params().temperature, 0.7);
        assert_eq!(Variant::Extended.params().max_tokens, 2048);
    }

    #[test]
    fn citation_policy_per_variant() {
        assert_eq!(Variant::ByAuthor.citation_limit(), Some(3));
        assert_eq!(Variant::Extended.citation_limit(), None);
        assert_eq!(
            Variant::EconomicRefutation.citation_style(),
            crate::search::CitationStyle::BareUrl
        );
    }
}
