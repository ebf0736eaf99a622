use crate::profile::{SpeciesProfile, default_pain_bands};

use super::{frequency, frequency_labels};

pub const SPECIES_ID: &str = "aves";

/// Birds, from general behavioural observation.
pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Aves")
        .with_description("Avaliação de dor em aves (0 = nunca, 7 = sempre).")
        .with_answer_labels(frequency_labels())
        .with_pain_bands(default_pain_bands())
        .with_category(
            "postura_mobilidade",
            "Postura e Mobilidade",
            [
                frequency(
                    "postura_anormal",
                    "Minha ave está com postura anormal (arrepiada, encolhida)?",
                ),
                frequency(
                    "reduziu_movimento",
                    "Minha ave reduziu a movimentação ou não voa mais?",
                ),
            ],
        )
        .with_category(
            "alimentacao",
            "Alimentação e Hábito",
            [
                frequency("come_menos", "Minha ave está comendo menos?"),
                frequency("bebe_menos", "Minha ave bebe menos água?"),
            ],
        )
        .with_category(
            "comportamento",
            "Comportamento",
            [
                frequency(
                    "vocalizacao_alterada",
                    "Minha ave vocaliza menos ou de forma diferente?",
                ),
                frequency("agressividade", "Minha ave evita contato ou fica mais agressiva?"),
            ],
        )
        .with_category(
            "aparencia",
            "Aparência",
            [
                frequency(
                    "penas_ericadas",
                    "Minha ave está com penas eriçadas ou desalinhadas?",
                ),
                frequency("inatividade", "Minha ave fica muito tempo parada no mesmo lugar?"),
            ],
        )
}
