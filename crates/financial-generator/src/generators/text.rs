//! Lorem text generators for item names and descriptions.

use fake::faker::lorem::en::{Paragraph, Word};
use fake::Fake;
use rand::Rng;

/// Sentences per generated description.
const DESCRIPTION_SENTENCES: std::ops::Range<usize> = 1..4;

pub fn generate_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

pub fn generate_paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    Paragraph(DESCRIPTION_SENTENCES).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_text() {
        let mut rng = StdRng::seed_from_u64(42);

        let word = generate_word(&mut rng);
        assert!(!word.is_empty());
        assert!(!word.contains(' '));

        let paragraph = generate_paragraph(&mut rng);
        assert!(!paragraph.is_empty());
    }
}
