use eyre::Result;

use pairalign_alignment_rs::pairwise::scoring::{self, presets};
use pairalign_alignment_rs::pairwise::select::Preference;
use pairalign_alignment_rs::pairwise::{sw, AlignmentSeed, Error, Options, Variant};

use super::*;

struct Workload<'a> {
    seq1: (&'a str, usize),
    seq2: (&'a str, usize),
    score: i64,
    aligned: (&'a str, &'a str),
}

fn ensure(scoring: fn() -> Scheme, w: &Workload<'_>) -> Result<()> {
    for selector in [Preference::DIAGONAL_FIRST, Preference::UP_FIRST] {
        let aligned = local(w.seq1.0, w.seq2.0, scoring(), selector)?;
        assert_eq!(
            rendered(&aligned),
            (w.aligned.0.to_string(), w.aligned.1.to_string()),
            "{} vs {}",
            w.seq1.0,
            w.seq2.0
        );
        assert_eq!(*aligned.score(), w.score);
        assert_eq!(aligned.seq1().start, w.seq1.1);
        assert_eq!(aligned.seq2().start, w.seq2.1);
    }
    Ok(())
}

fn mirrored<'a>(w: &Workload<'a>) -> Workload<'a> {
    Workload {
        seq1: w.seq2,
        seq2: w.seq1,
        score: w.score,
        aligned: (w.aligned.1, w.aligned.0),
    }
}

#[test]
fn test_default_scoring() -> Result<()> {
    let workload = Workload {
        seq1: ("CAGCCUCGCUUAG", 2),
        seq2: ("AAUGCCAUUGACGG", 3),
        score: 6,
        aligned: ("GCC-UCG", "GCCAUUG"),
    };
    ensure(presets::smith_waterman, &workload)?;
    ensure(presets::smith_waterman, &mirrored(&workload))?;

    // Equal-scoring cells: the one filled last wins, so the mirrored run picks another region
    let workload = Workload {
        seq1: ("ACACACTA", 1),
        seq2: ("AGCACACA", 2),
        score: 10,
        aligned: ("CACAC", "CACAC"),
    };
    ensure(presets::smith_waterman, &workload)?;
    let workload = Workload {
        seq1: ("AGCACACA", 3),
        seq2: ("ACACACTA", 0),
        score: 10,
        aligned: ("ACACA", "ACACA"),
    };
    ensure(presets::smith_waterman, &workload)?;
    Ok(())
}

#[test]
fn test_alternative_scoring() -> Result<()> {
    let scoring = presets::alternative;
    let aligned = local("CAGCCUCGCUUAG", "AAUGCCAUUGACGG", scoring(), Preference::default())?;
    assert_eq!(rendered(&aligned), ("GCC-UCG-C".to_string(), "GCCAUUGAC".to_string()));
    assert_eq!(*aligned.score(), 3);
    assert_eq!(*aligned.seq1(), 2..9);
    assert_eq!(*aligned.seq2(), 3..12);

    let aligned = local("ACACACTA", "AGCACACA", scoring(), Preference::default())?;
    assert_eq!(rendered(&aligned), ("CACACTA".to_string(), "CACAC-A".to_string()));
    assert_eq!(*aligned.score(), 5);
    Ok(())
}

#[test]
fn test_best_cell() -> Result<()> {
    let options = options(presets::smith_waterman(), Preference::default());
    let (seq1, seq2) = (b"CAGCCUCGCUUAG".as_slice(), b"AAUGCCAUUGACGG".as_slice());
    let aligner = sw::SmithWaterman::new(seq1, seq2, options)?;

    let best = AlignmentSeed {
        row: 8,
        col: 10,
        score: 6,
    };
    assert_eq!(aligner.best(), best);
    assert_eq!(aligner.max_score(), 6);
    assert_eq!(aligner.matrix().best()?, best);
    assert_eq!(aligner.value(8, 10)?, 6);
    assert_eq!(*aligner.matrix().variant(), Variant::Local);

    let err = aligner.matrix().score().unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedVariant {
            operation: "score",
            variant: Variant::Local
        }
    );
    Ok(())
}

#[test]
fn test_traceback_path() -> Result<()> {
    let options = options(presets::smith_waterman(), Preference::default());
    let (seq1, seq2) = (b"CAGCCUCGCUUAG".as_slice(), b"AAUGCCAUUGACGG".as_slice());
    let aligner = sw::SmithWaterman::new(seq1, seq2, options)?;

    let visited = aligner
        .traceback()
        .map(|step| step.map(|x| (x.row, x.col, x.direction.symbol())))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    assert_eq!(
        visited,
        vec![
            (8, 10, '\\'),
            (7, 9, '\\'),
            (6, 8, '\\'),
            (5, 7, '<'),
            (5, 6, '\\'),
            (4, 5, '\\'),
            (3, 4, '\\'),
        ]
    );
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let workload = [
        ("ACGT", ""),
        ("", "ACGT"),
        ("", ""),
        ("AAAA", "CCC"),
        ("ACGT", "----"),
    ];
    for (seq1, seq2) in workload {
        let aligned = local(seq1, seq2, presets::smith_waterman(), Preference::default())?;
        assert!(aligned.is_empty());
        assert_eq!(*aligned.score(), 0);
        assert_eq!(aligned.seq1().len(), 0);
        assert_eq!(aligned.seq2().len(), 0);
    }
    Ok(())
}

#[test]
fn test_custom_scoring() -> Result<()> {
    // Transitions (A <-> G, C <-> T) are penalized less than transversions
    let purine = |x: &char| matches!(x, 'A' | 'G');
    let scheme = scoring::with_gap_penalty(
        move |a: &char, b: &char| {
            if a == b {
                3
            } else if purine(a) == purine(b) {
                1
            } else {
                -3
            }
        },
        -4,
    );
    let options = Options::new(scheme).with_gap('-');
    let (aligned1, aligned2) = sw::align(
        "TTTAGCATTT".chars().collect::<Vec<_>>(),
        "AAAGGCAAAA".chars().collect::<Vec<_>>(),
        options,
    )?;
    assert_eq!(aligned1.into_iter().collect::<String>(), "AGCA");
    assert_eq!(aligned2.into_iter().collect::<String>(), "GGCA");
    Ok(())
}

#[test]
fn test_forbidden_substitution() -> Result<()> {
    let options = || Options::new(presets::basic::<i64, u8>(2, i64::MIN, -3)).with_gap(GAP);

    let aligner = sw::SmithWaterman::new(b"AC".as_slice(), b"AG".as_slice(), options())?;
    assert_eq!(aligner.max_score(), 2);
    assert_eq!(
        aligner.best(),
        AlignmentSeed {
            row: 1,
            col: 1,
            score: 2
        }
    );

    let (aligned1, aligned2) = sw::align(b"GAACT".as_slice(), b"GTACT".as_slice(), options())?;
    assert_eq!(aligned1, b"ACT");
    assert_eq!(aligned2, b"ACT");
    Ok(())
}
