use crate::Coordinate;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// Pages per volume.
pub const PAGES: u32 = 420;
/// Volumes per shelf.
pub const VOLUMES: u32 = 32;
/// Shelves per wall.
pub const SHELVES: u32 = 5;

/// Pages on one wall: `420 * 32 * 5`.
pub const PAGES_PER_WALL: u64 = (PAGES * VOLUMES * SHELVES) as u64;

/// Mixed-radix encoding of a coordinate.
///
/// `page + volume*420 + shelf*420*32 + wall*420*32*5`. The fields are not checked here;
/// out-of-range shelf, volume or page values spill into the next field up.
pub fn encode(coord: &Coordinate) -> BigUint {
    let low = u64::from(coord.page)
        + u64::from(coord.volume) * u64::from(PAGES)
        + u64::from(coord.shelf) * u64::from(PAGES * VOLUMES);
    BigUint::from(coord.wall) * PAGES_PER_WALL + low
}

/// Splits a position number back into its coordinate.
///
/// Returns `None` when the wall does not fit in a `u64`.
pub fn decode(pos: &BigUint) -> Option<Coordinate> {
    let (wall, rest) = pos.div_rem(&BigUint::from(PAGES_PER_WALL));
    let rest = rest.to_u64()?;

    let page = (rest % u64::from(PAGES)) as u32;
    let volume = ((rest / u64::from(PAGES)) % u64::from(VOLUMES)) as u32;
    let shelf = (rest / u64::from(PAGES * VOLUMES)) as u32;

    Some(Coordinate {
        wall: wall.to_u64()?,
        shelf,
        volume,
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(wall: u64, shelf: u32, volume: u32, page: u32) -> Coordinate {
        Coordinate {
            wall,
            shelf,
            volume,
            page,
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode(&coord(0, 0, 0, 0)), BigUint::from(0u32));
        assert_eq!(encode(&coord(0, 0, 0, 419)), BigUint::from(419u32));
        assert_eq!(encode(&coord(0, 0, 1, 0)), BigUint::from(420u32));
        assert_eq!(encode(&coord(0, 1, 0, 0)), BigUint::from(13_440u32));
        assert_eq!(encode(&coord(1, 0, 0, 0)), BigUint::from(67_200u32));
        // Default address of the browser demo.
        assert_eq!(encode(&coord(2, 3, 7, 133)), BigUint::from(177_793u32));
    }

    #[test]
    fn test_round_trip_corners() {
        for wall in [0u64, 1, 9, 10, 1 << 40, u64::MAX] {
            for shelf in [0, SHELVES - 1] {
                for volume in [0, 17, VOLUMES - 1] {
                    for page in [0, 211, PAGES - 1] {
                        let c = coord(wall, shelf, volume, page);
                        assert_eq!(decode(&encode(&c)), Some(c));
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_field_spills_upward() {
        // page 420 on volume 0 is indistinguishable from page 0 on volume 1
        assert_eq!(encode(&coord(0, 0, 0, 420)), encode(&coord(0, 0, 1, 0)));
        assert_eq!(encode(&coord(0, 5, 0, 0)), encode(&coord(1, 0, 0, 0)));
    }

    #[test]
    fn test_wall_too_large() {
        let pos = BigUint::from(u64::MAX) * PAGES_PER_WALL * 2u32;
        assert_eq!(decode(&pos), None);
    }
}
