use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Knuth's MMIX multiplier.
pub const MULTIPLIER: u64 = 6364136223846793005;

/// Additive constant of the generator.
pub const INCREMENT: u64 = 1;

/// The generator works modulo `2^MODULUS_BITS`.
pub const MODULUS_BITS: u64 = 15565;

/// A linear congruential generator `x -> (a*x + c) mod 2^bits` that can be run backwards.
///
/// With an odd multiplier and a power-of-two modulus the step is a bijection on
/// `[0, 2^bits)`, so the same type serves as the filler's pseudorandom source and as the
/// handle scrambler.
#[derive(Debug, Clone)]
pub struct Lcg {
    multiplier: BigUint,
    inverse: BigUint,
    increment: BigUint,
    modulus: BigUint,
    mask: BigUint,
    bits: u64,
}

impl Lcg {
    /// Builds a generator, computing the multiplier's inverse once.
    ///
    /// Returns `None` when `multiplier` is even (no inverse modulo a power of two)
    /// or `bits` is zero.
    pub fn new(multiplier: u64, increment: u64, bits: u64) -> Option<Self> {
        if bits == 0 || multiplier % 2 == 0 {
            return None;
        }

        let modulus = BigUint::one() << bits;
        let mask = &modulus - 1u32;
        let multiplier = BigUint::from(multiplier);
        let inverse = mod_inverse(&multiplier, &modulus)?;

        Some(Lcg {
            increment: BigUint::from(increment) & &mask,
            multiplier: multiplier & &mask,
            inverse,
            modulus,
            mask,
            bits,
        })
    }

    /// The generator used throughout the library.
    pub fn standard() -> Self {
        Self::new(MULTIPLIER, INCREMENT, MODULUS_BITS)
            .unwrap_or_else(|| unreachable!("standard multiplier is odd"))
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn multiplier(&self) -> &BigUint {
        &self.multiplier
    }

    /// The multiplier's inverse modulo `2^bits`.
    pub fn inverse(&self) -> &BigUint {
        &self.inverse
    }

    /// One forward step: `(a*x + c) mod 2^bits`.
    pub fn step(&self, x: &BigUint) -> BigUint {
        (&self.multiplier * x + &self.increment) & &self.mask
    }

    /// Undoes [`Lcg::step`]: `a⁻¹ * (y - c) mod 2^bits`.
    ///
    /// `y` is reduced modulo `2^bits` first, so any input has a preimage.
    pub fn unstep(&self, y: &BigUint) -> BigUint {
        // y - c mod 2^bits, staying unsigned by adding the modulus first.
        let shifted = ((y & &self.mask) + &self.modulus - &self.increment) & &self.mask;
        (&self.inverse * shifted) & &self.mask
    }
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Returns `None` when `a` and `m` are not coprime.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return None;
    }

    egcd.x.mod_floor(&m).to_biguint()
}
