use crate::profile::{Question, SpeciesProfile};
use crate::scale::Scale;

pub const SPECIES_ID: &str = "repteis";

/// Reptiles: placeholder until a validated questionnaire exists. Its only
/// question is informational (weight 0), so every score is degenerate.
pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Répteis")
        .with_description("Avaliação de dor em répteis: em construção.")
        .unavailable()
        .with_category(
            "em_desenvolvimento",
            "Avaliação em desenvolvimento",
            [Question::new(
                "avaliacao_indisponivel",
                "A avaliação de dor para répteis ainda está em desenvolvimento.",
                Scale::new(0, 0),
            )
            .with_weight(0.0)],
        )
}
