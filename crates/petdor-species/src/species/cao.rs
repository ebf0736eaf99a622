use crate::profile::{SpeciesProfile, default_pain_bands};

use super::{frequency, frequency_labels};

pub const SPECIES_ID: &str = "cao";

/// Dogs. Based on the CBPI and the Glasgow Composite Pain Scale; the
/// positively phrased items (play, appetite, affection, sleep) are inverted.
pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Cachorro")
        .with_description(
            "Escala comportamental para avaliação de dor em cães (0 = nunca, 7 = sempre).",
        )
        .with_answer_labels(frequency_labels())
        .with_pain_bands(default_pain_bands())
        .with_category(
            "energia_atividade",
            "Energia e Atividade",
            [
                frequency("pouca_energia", "Meu cão teve pouca energia?"),
                frequency("brincalhao", "Meu cão foi brincalhão?").inverted(),
                frequency("atividades_favoritas", "Meu cão fez as suas atividades favoritas?")
                    .inverted(),
            ],
        )
        .with_category(
            "alimentacao",
            "Alimentação",
            [
                frequency("apetite_reduzido", "O apetite do meu cão reduziu?"),
                frequency(
                    "comeu_normalmente",
                    "Meu cão comeu normalmente a sua comida favorita?",
                )
                .inverted(),
            ],
        )
        .with_category(
            "mobilidade",
            "Mobilidade",
            [
                frequency("reluta_levantar", "Meu cão reluta para levantar?"),
                frequency(
                    "dificuldade_levantar_deitar",
                    "Meu cão teve problemas para levantar-se ou deitar-se?",
                ),
                frequency("dificuldade_caminhar", "Meu cão teve problemas para caminhar?"),
                frequency("perda_equilibrio", "Meu cão caiu ou perdeu o equilíbrio?"),
            ],
        )
        .with_category(
            "comportamento_social",
            "Comportamento Social",
            [
                frequency("gosta_proximidade", "Meu cão gosta de estar perto de mim?").inverted(),
                frequency("afeto_normal", "Meu cão mostrou uma quantidade normal de afeto?")
                    .inverted(),
                frequency("aceita_toque", "Meu cão gostou de ser tocado ou acariciado?")
                    .inverted(),
            ],
        )
        .with_category(
            "comportamento_geral",
            "Comportamento Geral",
            [
                frequency("comportamento_normal", "Meu cão agiu normalmente?").inverted(),
                frequency("desconforto", "Meu cão teve problemas para ficar confortável?"),
            ],
        )
        .with_category(
            "sono",
            "Sono",
            [frequency("sono_noturno", "Meu cão dormiu bem durante a noite?").inverted()],
        )
}
