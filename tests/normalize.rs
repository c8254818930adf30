use csv::ReaderBuilder;
use tonemark::{Comparison, ParseError, ParseOptions, PinyinString, parse, parse_with};

fn records(path: &str) -> Vec<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .unwrap();

    reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

fn kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::InvalidInitial { .. } => "InvalidInitial",
        ParseError::InvalidFinal { .. } => "InvalidFinal",
        ParseError::IllegalCombination { .. } => "IllegalCombination",
        ParseError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        ParseError::UnexpectedEnding { .. } => "UnexpectedEnding",
        ParseError::UnexpectedSeparator { .. } => "UnexpectedSeparator",
        ParseError::MisplacedErhua { .. } => "MisplacedErhua",
        ParseError::DoubleErhua { .. } => "DoubleErhua",
    }
}

#[test]
fn normalize_fixture() {
    for record in records("fixtures/normalize.csv") {
        let [input, word_breaks, expected] = record.as_slice() else {
            panic!("malformed record {record:?}");
        };
        let options = ParseOptions {
            word_breaks: word_breaks == "true",
        };

        let s = parse_with(input, options).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        assert_eq!(s.as_str(), expected, "normalizing {input:?}");

        // Canonical output reads back as itself.
        let again = parse_with(expected, options).unwrap();
        assert_eq!(again.as_str(), expected);
        assert!(again.eq_with(
            &s,
            Comparison {
                case_sensitive: true,
                space_sensitive: true
            }
        ));
    }
}

#[test]
fn invalid_fixture() {
    for record in records("fixtures/invalid.csv") {
        let [input, expected] = record.as_slice() else {
            panic!("malformed record {record:?}");
        };

        match parse(input) {
            Ok(s) => panic!("{input:?} parsed as {s}"),
            Err(e) => assert_eq!(kind(&e), expected, "parsing {input:?}: {e}"),
        }
    }
}

#[test]
fn error_positions() {
    assert_eq!(
        parse("  ni3 hao3+"),
        Err(ParseError::UnexpectedCharacter {
            character: '+',
            position: 10
        })
    );
    assert_eq!(
        parse("fai1"),
        Err(ParseError::IllegalCombination {
            source: tonemark::syllable::IllegalCombination {
                initial: tonemark::Initial::F,
                final_: tonemark::Final::Ai,
            },
            position: 0
        })
    );
    assert_eq!(
        parse("ma1 r5 r5"),
        Err(ParseError::DoubleErhua { position: 7 })
    );
    assert_eq!(parse("r5 ma1"), Err(ParseError::MisplacedErhua { position: 0 }));
    assert_eq!(
        parse("xi\u{304}a\u{304}n"),
        Err(ParseError::UnexpectedCharacter {
            character: '\u{304}',
            position: 5
        })
    );
    assert_eq!(
        parse("xi'1"),
        Err(ParseError::UnexpectedSeparator {
            syllable: "xi".to_string(),
            position: 2
        })
    );
}

#[test]
fn error_messages() {
    let err = parse("gai2+hello").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected character '+' at 4.");

    let err = parse("fai1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Illegal syllable at 0: Initial \"f\" cannot be combined with final \"ai\"."
    );
}

#[test]
fn empty_text() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   ").unwrap().is_empty());
    assert_eq!(parse(" , ").unwrap_err(), ParseError::UnexpectedCharacter {
        character: ',',
        position: 1
    });
}

#[test]
fn word_breaks() {
    let s = parse("zhe4 shi4  wo3").unwrap();
    assert_eq!(s.len(), 5);
    assert_eq!(s.syllables().count(), 3);
    assert!(s.entries()[1].is_none());

    let s = parse_with("zhe4 shi4  wo3", ParseOptions { word_breaks: false }).unwrap();
    assert_eq!(s.len(), 3);

    for text in ["ni3,", "ni3 \u{B7}", "ni3 , "] {
        assert_eq!(parse(text).unwrap().len(), 1, "{text:?}");
    }
}

#[test]
fn equal_ignoring_case_and_spacing() {
    let a: PinyinString = "Ni3 de Su4she4 zai4 nar3".parse().unwrap();
    let b: PinyinString = "ni3 de0 Su4she4 zai4na3 r5".parse().unwrap();
    assert_eq!(a, b);
    assert!(!a.eq_with(
        &b,
        Comparison {
            case_sensitive: true,
            space_sensitive: false
        }
    ));
    assert!(!a.eq_with(
        &b,
        Comparison {
            case_sensitive: false,
            space_sensitive: true
        }
    ));
}

#[test]
fn not_equal() {
    let cases = [
        ("Nar4 you3 ben3zi ma5", "Nar4 you2 ben3 zi ma"),
        ("Hui4", "hu4"),
        ("xi4zhu3ren4", "xi4zhu4ren4"),
        ("ma1", "ma1ma1"),
    ];

    for (a, b) in cases {
        assert_ne!(parse(a).unwrap(), parse(b).unwrap(), "{a:?} vs {b:?}");
    }
}

#[test]
fn display_matches_as_str() {
    let s = parse("Bei3jing1 huan1ying2 ni3").unwrap();
    assert_eq!(s.to_string(), s.as_str());
    assert_eq!(
        s.to_string(),
        "Be\u{30C}iji\u{304}ng hua\u{304}nyi\u{301}ng ni\u{30C}"
    );
}

#[test]
fn collected_from_syllables() {
    let parsed = parse("ni3 hao3").unwrap();
    let collected: PinyinString = parsed.entries().iter().copied().collect();
    assert_eq!(collected.as_str(), parsed.as_str());
}

#[test]
fn shared_between_threads() {
    let s = parse("ni3 hao3").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| assert_eq!(s.as_str(), "ni\u{30C} ha\u{30C}o"));
        }
    });
}
