use std::collections::HashSet;

use tonemark::{
    Final, Initial, Syllable, Tone,
    phonology::{is_legal, legal_finals},
    syllable::{DecodeError, IllegalCombination},
};

fn every_syllable() -> impl Iterator<Item = Syllable> {
    Initial::ALL.into_iter().flat_map(|initial| {
        legal_finals(initial).flat_map(move |final_| {
            Tone::ALL.into_iter().flat_map(move |tone| {
                [(false, false), (true, false), (false, true), (true, true)]
                    .into_iter()
                    .map(move |(erhua, capitalized)| {
                        Syllable::new(initial, final_, tone, erhua, capitalized).unwrap()
                    })
            })
        })
    })
}

#[test]
fn bits_round_trip() {
    let mut seen = HashSet::new();

    for syllable in every_syllable() {
        let bits = syllable.to_bits();
        assert!(seen.insert(bits), "{syllable:?} collides");

        let decoded = Syllable::from_bits(bits).unwrap();
        assert!(decoded.eq_with(&syllable, true), "{syllable:?}");
    }

    assert_eq!(seen.len(), 420 * 5 * 4);
}

#[test]
fn spellings_parse_back() {
    for syllable in every_syllable() {
        let spelling = syllable.to_pinyin();
        let parsed = tonemark::parse(&spelling).unwrap_or_else(|e| panic!("{spelling:?}: {e}"));
        let parsed: Vec<_> = parsed.syllables().copied().collect();

        assert_eq!(parsed.len(), 1, "{spelling:?}");
        assert!(parsed[0].eq_with(&syllable, true), "{spelling:?}");
    }
}

#[test]
fn bad_bits() {
    assert_eq!(Syllable::from_bits(22), Err(DecodeError::InitialIndex(22)));
    assert_eq!(Syllable::from_bits(40 << 5), Err(DecodeError::FinalIndex(40)));
    assert_eq!(Syllable::from_bits(7 << 11), Err(DecodeError::ToneIndex(7)));
    assert_eq!(Syllable::from_bits(5 << 11), Err(DecodeError::ToneIndex(5)));
    assert_eq!(
        Syllable::try_from(4u16 | 3 << 5),
        Err(DecodeError::IllegalCombination(IllegalCombination {
            initial: Initial::F,
            final_: Final::Ai,
        }))
    );
}

#[test]
fn illegal_construction() {
    assert!(Syllable::new(Initial::J, Final::A, Tone::High, false, false).is_err());
    assert!(Syllable::new(Initial::B, Final::Ong, Tone::High, false, false).is_err());
    assert!(!is_legal(Initial::Zh, Final::V));
    assert!(is_legal(Initial::L, Final::V));
}

#[test]
fn rendering() {
    let cases = [
        (Initial::N, Final::V, Tone::Low, false, false, "nü\u{30C}"),
        (Initial::L, Final::Ve, Tone::Falling, false, false, "lüe\u{300}"),
        (Initial::J, Final::Ve, Tone::Rising, false, false, "jue\u{301}"),
        (Initial::Empty, Final::E, Tone::Rising, true, false, "e\u{301}r"),
        (Initial::Empty, Final::Iu, Tone::Low, false, false, "yo\u{30C}u"),
        (Initial::G, Final::Ou, Tone::Low, false, true, "Go\u{30C}u"),
        (Initial::Empty, Final::Van, Tone::Rising, false, false, "yua\u{301}n"),
        (Initial::D, Final::Ui, Tone::High, false, false, "dui\u{304}"),
        (Initial::B, Final::Uo, Tone::Rising, false, false, "bo\u{301}"),
        (Initial::H, Final::Ua, Tone::High, true, false, "hua\u{304}r"),
        (Initial::Empty, Final::A, Tone::Falling, false, true, "A\u{300}"),
        (Initial::D, Final::E, Tone::Neutral, false, false, "de"),
    ];

    for (initial, final_, tone, erhua, capitalized, expected) in cases {
        let syllable = Syllable::new(initial, final_, tone, erhua, capitalized).unwrap();
        assert_eq!(syllable.to_string(), expected);
    }
}

#[test]
fn equality_ignores_case() {
    let lower = Syllable::new(Initial::M, Final::A, Tone::High, false, false).unwrap();
    let upper = Syllable::new(Initial::M, Final::A, Tone::High, false, true).unwrap();

    assert_eq!(lower, upper);
    assert!(!lower.eq_with(&upper, true));

    let mut set = HashSet::new();
    set.insert(lower);
    assert!(set.contains(&upper));
}

#[test]
fn codas_and_starts() {
    let wanr = Syllable::new(Initial::Empty, Final::Uan, Tone::Rising, true, false).unwrap();
    assert!(wanr.has_coda());
    assert!(wanr.has_unambiguous_start());

    let a = Syllable::new(Initial::Empty, Final::A, Tone::Neutral, false, false).unwrap();
    assert!(!a.has_coda());
    assert!(!a.has_unambiguous_start());

    let er = Syllable::new(Initial::Empty, Final::E, Tone::Falling, true, false).unwrap();
    assert!(er.has_coda());
    assert!(!er.has_unambiguous_start());
}
