use super::lcg::Lcg;
use super::page::page_modulus;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Joins a position number and a page number into one integer and permutes it.
///
/// The combined value is `position * 29^3200 + page`. Scrambling is one step of the
/// reversible LCG, so it only round-trips for combined values below the generator's
/// modulus; [`Scrambler::combine`] refuses anything larger.
#[derive(Debug, Clone)]
pub struct Scrambler {
    lcg: Lcg,
    page_modulus: BigUint,
    capacity: u64,
}

impl Scrambler {
    pub fn new(lcg: Lcg) -> Self {
        let page_modulus = page_modulus();
        let capacity = (lcg.modulus() / &page_modulus).to_u64().unwrap_or(u64::MAX);
        Self {
            lcg,
            page_modulus,
            capacity,
        }
    }

    pub fn lcg(&self) -> &Lcg {
        &self.lcg
    }

    /// `29^3200`.
    pub fn page_modulus(&self) -> &BigUint {
        &self.page_modulus
    }

    /// Number of positions for which every possible page fits below the modulus.
    ///
    /// Positions `0..capacity` always combine; position `capacity` combines only for
    /// low page numbers.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// `position * 29^3200 + page`, or `None` when the result reaches the modulus.
    ///
    /// `page` must already be below `29^3200`.
    pub fn combine(&self, position: &BigUint, page: &BigUint) -> Option<BigUint> {
        debug_assert!(page < &self.page_modulus);
        let combined = position * &self.page_modulus + page;
        if &combined >= self.lcg.modulus() {
            return None;
        }
        Some(combined)
    }

    /// Splits a combined value into `(position, page)`.
    pub fn split(&self, combined: &BigUint) -> (BigUint, BigUint) {
        combined.div_rem(&self.page_modulus)
    }

    pub fn scramble(&self, combined: &BigUint) -> BigUint {
        self.lcg.step(combined)
    }

    pub fn unscramble(&self, scrambled: &BigUint) -> BigUint {
        self.lcg.unstep(scrambled)
    }
}
