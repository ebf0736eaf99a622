use crate::profile::{SpeciesProfile, default_pain_bands};

use super::{frequency, frequency_labels};

pub const SPECIES_ID: &str = "coelho";

/// Rabbits. Based on the Rabbit Grimace Scale plus behavioural signs.
pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Coelho")
        .with_description(
            "Avaliação de dor em coelhos, baseada na Rabbit Grimace Scale (0 a 7).",
        )
        .with_answer_labels(frequency_labels())
        .with_pain_bands(default_pain_bands())
        .with_category(
            "postura_movimentacao",
            "Postura e Movimentação",
            [
                frequency(
                    "postura_anormal",
                    "Meu coelho está com postura anormal (curvado ou imóvel)?",
                ),
                frequency("menos_ativo", "Meu coelho está menos ativo ou se movimenta pouco?"),
                frequency("evita_saltar", "Meu coelho evita saltar ou explorar o ambiente?"),
            ],
        )
        .with_category(
            "expressao_facial",
            "Expressão Facial",
            [
                frequency(
                    "olhos_semicerrados",
                    "Meu coelho apresenta olhos semicerrados ou expressão tensa?",
                ),
                frequency("tensao_facial", "As bochechas ou o nariz parecem tensos ou retraídos?"),
            ],
        )
        .with_category(
            "alimentacao_higiene",
            "Alimentação e Higiene",
            [
                frequency("apetite_reduzido", "O apetite do meu coelho reduziu?"),
                frequency("menos_agua", "Meu coelho reduziu a ingestão de água?"),
                frequency("menos_higiene", "Meu coelho está menos limpo ou parou de se lamber?"),
            ],
        )
        .with_category(
            "comportamento_interacao",
            "Comportamento e Interação",
            [
                frequency("se_esconde", "Meu coelho se esconde mais do que o normal?"),
                frequency("reage_dor_toque", "Meu coelho reage com dor quando é tocado?"),
            ],
        )
}
