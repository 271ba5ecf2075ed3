//! Simple personal profile generator.
//!
//! Name, sex, username and email are drawn together so they stay coherent:
//! the first name is picked from the list that matches the sampled sex and the
//! email is built from the username.

use super::timestamp::generate_birthdate;
use crate::records::Sex;
use chrono::NaiveDate;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::LastName;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Joshua", "Kevin",
    "Brian", "George",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley", "Emily", "Donna",
    "Michelle", "Laura",
];

/// A bundle of coherent fake personal attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleProfile {
    pub sex: Sex,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub birthdate: NaiveDate,
}

impl SimpleProfile {
    /// Display name, "First Last".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// First names matching the given sex.
pub fn first_names(sex: Sex) -> &'static [&'static str] {
    match sex {
        Sex::Male => MALE_FIRST_NAMES,
        Sex::Female => FEMALE_FIRST_NAMES,
    }
}

/// Generate a profile whose attributes agree with each other.
pub fn generate_simple_profile<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> SimpleProfile {
    let sex = if rng.random_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };
    let first_name = first_names(sex)
        .choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_default();
    let last_name: String = LastName().fake_with_rng(rng);

    let user_name = build_user_name(&first_name, &last_name, rng.random_range(1..=99));
    let provider: String = FreeEmailProvider().fake_with_rng(rng);
    let email = format!("{user_name}@{provider}");
    let birthdate = generate_birthdate(rng, today);

    SimpleProfile {
        sex,
        first_name,
        last_name,
        user_name,
        email,
        birthdate,
    }
}

/// Lowercase first initial, last name and a numeric suffix, ASCII letters only.
fn build_user_name(first_name: &str, last_name: &str, suffix: u32) -> String {
    let initial = first_name
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase());
    let last: String = last_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut user_name = String::new();
    user_name.extend(initial);
    user_name.push_str(&last);
    user_name.push_str(&suffix.to_string());
    user_name
}
