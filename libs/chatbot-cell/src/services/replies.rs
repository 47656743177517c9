use rand::seq::SliceRandom;

/// Canned replies for questions unrelated to the hospital.
pub const REFUSALS: [&str; 3] = [
    "I'm here to help with hospital-related questions!",
    "Please ask relevant questions about Medisco Hospital! ",
    "That's not what I'm programmed for! Stick to hospital queries!",
];

pub fn random_refusal() -> &'static str {
    REFUSALS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(REFUSALS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_comes_from_the_canned_list() {
        for _ in 0..20 {
            assert!(REFUSALS.contains(&random_refusal()));
        }
    }
}
