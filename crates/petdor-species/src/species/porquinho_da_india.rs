use crate::profile::{SpeciesProfile, default_pain_bands};

use super::{frequency, frequency_labels};

pub const SPECIES_ID: &str = "porquinho_da_india";

pub fn profile() -> SpeciesProfile {
    SpeciesProfile::new(SPECIES_ID, "Porquinho-da-Índia")
        .with_description(
            "Avaliação de dor em porquinhos-da-índia (0 = nunca, 7 = sempre).",
        )
        .with_answer_labels(frequency_labels())
        .with_pain_bands(default_pain_bands())
        .with_category(
            "postura_movimento",
            "Postura e Movimentação",
            [
                frequency(
                    "curvado_imovel",
                    "Meu porquinho-da-índia está curvado ou imóvel por longos períodos",
                ),
                frequency(
                    "atividade_reduzida",
                    "Meu porquinho-da-índia reduziu suas atividades diárias",
                ),
                frequency(
                    "evita_explorar",
                    "Meu porquinho-da-índia evita correr ou explorar o ambiente",
                ),
            ],
        )
        .with_category(
            "alimentacao",
            "Alimentação",
            [
                frequency(
                    "apetite_reduzido",
                    "O apetite diminuiu ou ele está comendo mais devagar",
                ),
                frequency("agua_reduzida", "O consumo de água diminuiu"),
            ],
        )
        .with_category(
            "vocalizacao_comportamento",
            "Vocalização e Comportamento",
            [
                frequency(
                    "vocalizacao_diferente",
                    "Ele vocaliza de forma diferente (gritos, chiados ou sons incomuns)",
                ),
                frequency("dor_ao_toque", "Ele reage com dor ao toque ou à manipulação"),
                frequency("se_esconde", "Ele se esconde mais do que o habitual"),
            ],
        )
        .with_category(
            "aparencia_geral",
            "Aparência Geral",
            [
                frequency("pelo_desalinhado", "Ele está menos limpo ou com os pelos arrepiados"),
                frequency("respiracao_alterada", "A respiração parece mais rápida ou difícil"),
            ],
        )
}
