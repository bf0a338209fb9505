//! URL, network address and browser identity generators.

use fake::faker::internet::en::{DomainSuffix, UserAgent, IPv4};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;

/// Generate a site URL such as `https://dolor.com/`.
pub fn generate_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let host: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("https://{}.{}/", host.to_lowercase(), suffix)
}

/// Generate a dotted-quad IPv4 address.
pub fn generate_ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    IPv4().fake_with_rng(rng)
}

pub fn generate_user_agent<R: Rng + ?Sized>(rng: &mut R) -> String {
    UserAgent().fake_with_rng(rng)
}
