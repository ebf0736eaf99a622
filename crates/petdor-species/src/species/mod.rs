//! Built-in species profiles. One canonical definition per species.

pub mod aves;
pub mod cao;
pub mod coelho;
pub mod gato;
pub mod porquinho_da_india;
pub mod repteis;

use crate::profile::{Question, SpeciesProfile};
use crate::scale::Scale;

/// Every built-in profile, in the order they are registered and listed.
pub fn builtin_profiles() -> Vec<SpeciesProfile> {
    vec![
        cao::profile(),
        gato::profile(),
        coelho::profile(),
        porquinho_da_india::profile(),
        aves::profile(),
        repteis::profile(),
    ]
}

/// Answer labels for the 0–7 frequency scale.
pub fn frequency_labels() -> Vec<String> {
    [
        "0 - Nunca",
        "1 - Raramente",
        "2 - Às vezes",
        "3 - Frequentemente",
        "4 - Quase Sempre",
        "5 - Sempre",
        "6 - Muito Frequente",
        "7 - Constante",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A weight-1 question on the 0–7 frequency scale.
fn frequency(id: &str, text: &str) -> Question {
    Question::new(id, text, Scale::ZERO_TO_SEVEN)
}
