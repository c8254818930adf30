//! Which initials may precede which finals.
//!
//! Mandarin syllable inventories are a closed, irregular list, so the table
//! is enumerated rather than derived from a rule. Each initial maps to a
//! bitmask over final indices.

use super::{finals::Final, initial::Initial};

use Final::*;
use Initial::{B, C, Ch, D, F, G, H, J, K, L, M, N, P, Q, R, S, Sh, T, X, Z, Zh};

const fn cross(mut table: [u64; 22], initials: &[Initial], finals: &[Final]) -> [u64; 22] {
    let mut i = 0;
    while i < initials.len() {
        let mut f = 0;
        while f < finals.len() {
            table[initials[i] as usize] |= 1 << finals[f] as u8;
            f += 1;
        }
        i += 1;
    }
    table
}

const LEGAL: [u64; 22] = {
    let t = [0; 22];

    // Every final may stand alone.
    let t = cross(t, &[Initial::Empty], &Final::ALL);

    // Labials.
    let t = cross(t, &[B, P, M, F], &[A, Ei, An, En, Ang, Eng, Iao, U, Uo]);
    let t = cross(t, &[B, P, M], &[Ai, Ao, I, Ie, Ian, In, Ing]);
    let t = cross(t, &[M], &[E, Iu]);
    let t = cross(t, &[P, M, F], &[Ou]);
    let t = cross(t, &[B], &[Iang]);

    // Non-sibilant alveolars.
    let t = cross(
        t,
        &[D, T, N, L],
        &[
            A, E, Ai, Ei, Ao, Ou, An, Ang, Eng, Ong, I, Ie, Iao, Ian, Ing, U, Uo, Uan, Un,
        ],
    );
    let t = cross(t, &[L], &[O, Van, Vn]);
    let t = cross(t, &[D, N], &[En]);
    let t = cross(t, &[D, N, L], &[Ia, Iu, Iang]);
    let t = cross(t, &[N, L], &[In, V, Ve]);
    let t = cross(t, &[D, T], &[Ui]);

    // Velars.
    let t = cross(
        t,
        &[G, K, H],
        &[
            A, E, Ai, Ei, Ao, Ou, An, En, Ang, Eng, Ong, U, Ua, Uo, Uai, Ui, Uan, Un, Uang,
        ],
    );

    // Palatals.
    let t = cross(
        t,
        &[J, Q, X],
        &[I, Ia, Ie, Iao, Iu, Ian, In, Ing, Iang, Iong, V, Ve, Van, Vn],
    );

    // Retroflexes and sibilants.
    let t = cross(
        t,
        &[Zh, Ch, Sh, R, Z, C, S],
        &[E, Ao, Ou, An, En, Ang, Eng, Ong, I, U, Uo, Ui, Uan, Un],
    );
    let t = cross(t, &[Zh, Ch, Sh, Z, C, S], &[A, Ai]);
    let t = cross(t, &[Zh, Sh, Z, S], &[Ei]);
    let t = cross(t, &[Zh, Ch, Sh], &[Ua, Uai, Uang]);
    cross(t, &[R], &[Ua])
};

/// Whether a syllable may combine an initial with a final.
pub const fn is_legal(initial: Initial, final_: Final) -> bool {
    LEGAL[initial as usize] & (1 << final_ as u8) != 0
}

/// The finals that may follow an initial, ordered by index.
pub fn legal_finals(initial: Initial) -> impl Iterator<Item = Final> {
    Final::ALL
        .into_iter()
        .filter(move |final_| is_legal(initial, *final_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples() {
        assert!(is_legal(Initial::Empty, Final::Iai));
        assert!(is_legal(Initial::B, Final::Uo));
        assert!(is_legal(Initial::N, Final::V));
        assert!(is_legal(Initial::R, Final::Ua));
        assert!(is_legal(Initial::Zh, Final::I));

        assert!(!is_legal(Initial::F, Final::Ai));
        assert!(!is_legal(Initial::J, Final::U));
        assert!(!is_legal(Initial::B, Final::O));
        assert!(!is_legal(Initial::Ch, Final::Ei));
        assert!(!is_legal(Initial::T, Final::En));
    }

    #[test]
    fn palatals_only_take_front_finals() {
        for initial in [Initial::J, Initial::Q, Initial::X] {
            for final_ in legal_finals(initial) {
                assert!(matches!(final_.index(), 11..=22 | 32..=35), "{initial}{final_}");
            }
        }
    }

    #[test]
    fn legal_spellings_resolve() {
        for initial in Initial::ALL {
            for final_ in legal_finals(initial) {
                let spelling = final_.spelling(initial.place());
                assert_eq!(Final::from_spelling(initial.place(), spelling), Some(final_));
            }
        }
    }

    #[test]
    fn inventory_size() {
        let count = |i: Initial| legal_finals(i).count();
        assert_eq!(Initial::ALL.into_iter().map(count).sum::<usize>(), 420);
        assert_eq!(count(Initial::Empty), 36);
        assert_eq!(count(Initial::F), 10);
        assert_eq!(count(Initial::L), 28);
        assert_eq!(count(Initial::R), 15);
    }
}
