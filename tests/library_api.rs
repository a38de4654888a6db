//! Public API tests: round trips across the address space, concurrency and the
//! individual codecs as exported.

use babel_addr::prelude::*;
use babel_addr::{Alphabet, BASE, PAGES_PER_WALL, filler, lcg::Lcg, page, position, radix36};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_snippet(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| Alphabet.encode_digit(rng.random_range(0..BASE)).unwrap())
        .collect()
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0xBABE1);
    let safe_walls = Library::standard().safe_walls();

    for _ in 0..25 {
        let coord = Coordinate::new(
            rng.random_range(0..safe_walls),
            rng.random_range(0..5),
            rng.random_range(0..32),
            rng.random_range(0..420),
        );
        let snippet = random_snippet(&mut rng, 400);
        let offset = rng.random_range(0..=PAGE_LENGTH - snippet.len());

        let encoded = encode(&snippet, &coord, offset).unwrap();
        let decoded = decode(&encoded.handle).unwrap();

        assert_eq!(decoded.coordinate, coord);
        assert_eq!(decoded.page_text, encoded.page_text);
        assert!(decoded.contains_at(&snippet, offset));
    }
}

#[test]
fn test_position_round_trip_exhaustive_low_fields() {
    for shelf in 0..5 {
        for volume in 0..32 {
            for page in (0..420).step_by(7) {
                let coord = Coordinate::new(3, shelf, volume, page);
                let pos = position::encode(&coord);
                assert_eq!(position::decode(&pos), Some(coord));
            }
        }
    }
    assert_eq!(
        position::encode(&Coordinate::new(1, 0, 0, 0)),
        BigUint::from(PAGES_PER_WALL)
    );
}

#[test]
fn test_page_round_trip_random_pages() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..10 {
        let text: String = (0..PAGE_LENGTH)
            .map(|_| Alphabet.encode_digit(rng.random_range(0..BASE)).unwrap())
            .collect();
        let n = page::to_number(&text).unwrap();
        assert_eq!(page::from_number(&n), text);
    }
}

#[test]
fn test_radix36_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(36);
    for bits in [1u64, 8, 63, 64, 65, 1000, 15565] {
        let n: BigUint = (0..bits).fold(BigUint::from(0u32), |acc, _| {
            (acc << 1u32) + u32::from(rng.random_bool(0.5))
        });
        assert_eq!(radix36::decode(&radix36::encode(&n)).unwrap(), n);
    }
}

#[test]
fn test_origin_scenario() {
    let encoded = encode("ab", &Coordinate::new(0, 0, 0, 0), 0).unwrap();
    let filler = filler::generate(&Lcg::standard(), &BigUint::from(0u32), PAGE_LENGTH);
    assert!(encoded.page_text.starts_with("ab"));
    assert_eq!(encoded.page_text[2..], filler[2..]);

    let decoded = decode(&encoded.handle).unwrap();
    assert_eq!(decoded.page_text, encoded.page_text);
    assert_eq!(decoded.coordinate, Coordinate::default());
}

#[test]
fn test_validation_scenarios() {
    let origin = Coordinate::default();
    assert!(matches!(
        encode(&"x".repeat(3201), &origin, 0),
        Err(EncodeError::SnippetTooLong { .. })
    ));
    assert!(matches!(
        encode("XYZ", &origin, 0),
        Err(EncodeError::InvalidCharacter { .. })
    ));
    assert!(matches!(
        decode("!!!"),
        Err(DecodeError::InvalidCharacter { .. })
    ));
}

#[test]
fn test_concurrent_callers_agree() {
    let coord = Coordinate::new(4, 1, 2, 3);
    let expected = encode("shared", &coord, 321).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                let encoded = encode("shared", &coord, 321).unwrap();
                let decoded = decode(&encoded.handle).unwrap();
                (encoded, decoded)
            })
        })
        .collect();

    for h in handles {
        let (encoded, decoded) = h.join().unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(decoded.page_text, expected.page_text);
    }
}

#[test]
fn test_search_and_share_link() {
    let mut rng = StdRng::seed_from_u64(2024);
    let found = search("lost and found", &SearchOptions::default(), &mut rng).unwrap();
    let link = ShareLink::from_encoded(&found, "lost and found");

    let opened = ShareLink::parse(&link.to_string()).unwrap().open().unwrap();
    assert_eq!(opened.coordinate, found.coordinate);
    assert!(opened.find("lost and found").contains(&found.offset));
}

#[test]
fn test_config_bounds_match_library() {
    let config = LibraryConfig::load_default().unwrap();
    assert!(config.validate(Library::standard().safe_walls()).is_ok());
}
