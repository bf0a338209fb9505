//! Lorem-style text generators.

use fake::faker::address::en::CountryName;
use fake::faker::lorem::en::{Paragraphs, Sentence, Word};
use fake::Fake;
use rand::Rng;

/// Separator placed between paragraphs of generated body text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Generate a single lorem word.
pub fn generate_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// Generate a sentence of 4 to 9 words ending with a period.
pub fn generate_sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    Sentence(4..10).fake_with_rng(rng)
}

/// Generate `count` paragraphs joined into one string.
///
/// A count of zero still yields one paragraph.
pub fn generate_paragraphs<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    let count = count.max(1);
    let paragraphs: Vec<String> = Paragraphs(count..count + 1).fake_with_rng(rng);
    paragraphs.join(PARAGRAPH_SEPARATOR)
}

/// Generate a country name.
pub fn generate_country<R: Rng + ?Sized>(rng: &mut R) -> String {
    CountryName().fake_with_rng(rng)
}
