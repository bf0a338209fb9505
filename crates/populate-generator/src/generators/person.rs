//! Person and account field generators.

use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::Rng;

/// Generate a full person name ("First Last", possibly with a title or suffix).
pub fn generate_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

pub fn generate_first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn generate_last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// Generate a login name.
pub fn generate_username<R: Rng + ?Sized>(rng: &mut R) -> String {
    Username().fake_with_rng(rng)
}

/// Generate a password of 12 to 19 characters.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    Password(12..20).fake_with_rng(rng)
}

/// Generate an email address on a reserved example domain.
pub fn generate_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}
