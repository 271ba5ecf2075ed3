//! Record generator for the financial tables.

use crate::generators::address::generate_address_parts;
use crate::generators::numeric::{generate_price, generate_quantity};
use crate::generators::profile::generate_simple_profile;
use crate::generators::text::{generate_paragraph, generate_word};
use crate::generators::timestamp::{generate_date_this_decade, generate_datetime_this_year};
use crate::generators::uuid::generate_uuid_v4;
use crate::records::{Address, Customer, Item, Order, OrderDetail, OrderStatus};
use chrono::{NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use uuid::Uuid;

/// Produces one record per call, all drawn from a single random stream.
///
/// The RNG lives as long as the generator, so consecutive calls within a run
/// continue the same sequence instead of re-seeding.
pub struct DataGenerator {
    /// Random source shared by every field of every record
    rng: StdRng,
    /// Reference clock for date windows; `None` means the current UTC time
    now: Option<NaiveDateTime>,
}

impl DataGenerator {
    /// Create a generator.
    ///
    /// With a seed the output is reproducible. Without one the RNG is seeded
    /// from the operating system, which keeps identifiers distinct across runs
    /// against the same database.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, now: None }
    }

    /// Pin the reference clock used for date windows.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Utc::now().naive_utc())
    }

    pub fn generate_customer(&mut self) -> Customer {
        let now = self.now();
        let id = generate_uuid_v4(&mut self.rng);
        let profile = generate_simple_profile(&mut self.rng, now.date());

        Customer {
            id,
            name: profile.name(),
            user_name: profile.user_name,
            sex: profile.sex,
            email: profile.email,
            birthdate: profile.birthdate,
            create_date: generate_date_this_decade(&mut self.rng, now),
        }
    }

    pub fn generate_order(&mut self, customer_id: Uuid) -> Order {
        let now = self.now();
        let id = generate_uuid_v4(&mut self.rng);
        let order_date = generate_datetime_this_year(&mut self.rng, now);
        let status = OrderStatus::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(OrderStatus::Pending);

        Order {
            id,
            customer_id,
            order_date,
            status,
        }
    }

    pub fn generate_address(&mut self, customer_id: Uuid) -> Address {
        let id = generate_uuid_v4(&mut self.rng);
        let parts = generate_address_parts(&mut self.rng);

        Address {
            id,
            customer_id,
            address: parts.street,
            city: parts.city,
            state: parts.state,
            zip_code: parts.zip_code,
            country: parts.country,
        }
    }

    pub fn generate_item(&mut self) -> Item {
        let now = self.now();

        Item {
            id: generate_uuid_v4(&mut self.rng),
            name: generate_word(&mut self.rng),
            description: generate_paragraph(&mut self.rng),
            price: generate_price(&mut self.rng),
            create_date: generate_date_this_decade(&mut self.rng, now),
        }
    }

    /// Generate an order line for the given order and item.
    ///
    /// The price is drawn independently of the item's price.
    pub fn generate_order_details(&mut self, order_id: Uuid, item_id: Uuid) -> OrderDetail {
        OrderDetail {
            id: generate_uuid_v4(&mut self.rng),
            order_id,
            item_id,
            quantity: generate_quantity(&mut self.rng),
            price: generate_price(&mut self.rng),
        }
    }
}
