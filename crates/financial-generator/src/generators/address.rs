//! Postal address generator.
//!
//! Each part is drawn on its own; city, state, zip code and country are not
//! geographically consistent with each other.

use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode};
use fake::Fake;
use rand::Rng;

/// Raw address parts, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

pub fn generate_address_parts<R: Rng + ?Sized>(rng: &mut R) -> AddressParts {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street_name: String = StreetName().fake_with_rng(rng);

    AddressParts {
        street: format!("{building} {street_name}"),
        city: CityName().fake_with_rng(rng),
        state: StateName().fake_with_rng(rng),
        zip_code: ZipCode().fake_with_rng(rng),
        country: CountryName().fake_with_rng(rng),
    }
}
