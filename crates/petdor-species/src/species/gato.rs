use crate::profile::{SpeciesProfile, default_pain_bands};

use super::{frequency, frequency_labels};

pub const SPECIES_ID: &str = "gato";

/// Cats. Every item describes a pain sign, so none is inverted.
pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Gato")
        .with_description("Avaliação de dor em gatos, baseada em escalas de dor felina (0 a 7).")
        .with_answer_labels(frequency_labels())
        .with_pain_bands(default_pain_bands())
        .with_category(
            "comportamento_geral",
            "Comportamento Geral",
            [
                frequency("menos_ativo", "O gato está mais quieto ou menos ativo?"),
                frequency("mudanca_apetite", "Há mudanças no apetite ou no consumo de água?"),
                frequency("evita_interacao", "O gato está se escondendo ou evitando interação?"),
            ],
        )
        .with_category(
            "mobilidade",
            "Mobilidade",
            [
                frequency("dificuldade_pular", "Há dificuldade para pular, subir ou se mover?"),
                frequency(
                    "lambe_dor",
                    "O gato está lambendo ou mordendo excessivamente alguma parte do corpo?",
                ),
            ],
        )
        .with_category(
            "postura_expressao",
            "Postura e Expressão Facial",
            [
                frequency(
                    "postura_anormal",
                    "Há alterações na postura (ex: encurvado ou cabeça baixa)?",
                ),
                frequency(
                    "expressao_tensa",
                    "O gato está com os olhos semicerrados ou com a face tensa?",
                ),
            ],
        )
        .with_category(
            "vocalizacao",
            "Vocalização",
            [frequency(
                "mudanca_vocalizacao",
                "O gato está vocalizando mais ou menos do que o habitual?",
            )],
        )
        .with_category(
            "higiene",
            "Higiene",
            [frequency(
                "higiene_alterada",
                "Há mudanças nos hábitos de higiene (ex: pelo desgrenhado)?",
            )],
        )
        .with_category(
            "sono",
            "Sono",
            [frequency("sono_alterado", "O gato está dormindo mais ou em posições incomuns?")],
        )
}
