use eyre::{ensure, Result};
use rayon::prelude::*;

use pairalign_alignment_rs::pairwise::scoring::{presets, Scheme as _};
use pairalign_alignment_rs::pairwise::select::Preference;
use pairalign_alignment_rs::pairwise::{nw, sw, Aligned};

use super::*;

const PAIRS: &[(&str, &str)] = &[
    ("GAATTCAGTTA", "GGATCGA"),
    ("CAGCCUCGCUUAG", "AAUGCCAUUGACGG"),
    ("ACACACTA", "AGCACACA"),
    ("kitten", "sitting"),
    ("GATTACA", "GCATGCU"),
    ("AAAA", "AA"),
    ("ACGTACGTACGT", "TACGGT"),
    ("A", "A"),
    ("A", "C"),
    ("", "GATTACA"),
];

fn schemes() -> [Scheme; 3] {
    [
        presets::needleman_wunsch(),
        presets::alternative(),
        presets::smith_waterman(),
    ]
}

/// Re-scores the rendered columns, gaps never appear in the inputs
fn rescore(aligned: &Aligned<u8>, scheme: &Scheme) -> i64 {
    aligned
        .columns()
        .map(|(a, b)| -> i64 {
            match (*a == GAP, *b == GAP) {
                (false, false) => scheme.score_align(0, a, 0, b).into(),
                (false, true) => scheme.score_delete(0, a).into(),
                (true, false) => scheme.score_insert(0, b).into(),
                (true, true) => unreachable!("Column with two gaps"),
            }
        })
        .sum()
}

fn degap(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|x| *x != GAP).collect()
}

fn check(aligned: &Aligned<u8>, seq1: &str, seq2: &str, scheme: &Scheme) -> Result<()> {
    ensure!(
        aligned.aligned1().len() == aligned.aligned2().len(),
        "Aligned sequences differ in length: {seq1} vs {seq2}"
    );
    ensure!(
        degap(aligned.aligned1()) == seq1.as_bytes()[aligned.seq1().clone()],
        "Gapped seq1 doesn't restore the aligned range: {seq1} vs {seq2}"
    );
    ensure!(
        degap(aligned.aligned2()) == seq2.as_bytes()[aligned.seq2().clone()],
        "Gapped seq2 doesn't restore the aligned range: {seq1} vs {seq2}"
    );
    ensure!(
        rescore(aligned, scheme) == *aligned.score(),
        "Rendered columns don't sum up to the alignment score: {seq1} vs {seq2}"
    );
    Ok(())
}

#[test]
fn test_global_invariants() -> Result<()> {
    for scheme in schemes() {
        for (seq1, seq2) in PAIRS {
            for selector in [Preference::DIAGONAL_FIRST, Preference::UP_FIRST] {
                let aligned = global(seq1, seq2, scheme.clone(), selector)?;
                check(&aligned, seq1, seq2, &scheme)?;
                ensure!(*aligned.seq1() == (0..seq1.len()));
                ensure!(*aligned.seq2() == (0..seq2.len()));

                let reversed = global(seq2, seq1, scheme.clone(), selector)?;
                ensure!(aligned.score() == reversed.score(), "Asymmetric score: {seq1} vs {seq2}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_local_invariants() -> Result<()> {
    for scheme in schemes() {
        for (seq1, seq2) in PAIRS {
            let aligned = local(seq1, seq2, scheme.clone(), Preference::default())?;
            check(&aligned, seq1, seq2, &scheme)?;
            ensure!(*aligned.score() >= 0);
            ensure!(aligned.is_empty() == (*aligned.score() == 0));

            let reversed = local(seq2, seq1, scheme.clone(), Preference::default())?;
            ensure!(aligned.score() == reversed.score(), "Asymmetric score: {seq1} vs {seq2}");

            // A local alignment never scores below the global one
            let end_to_end = global(seq1, seq2, scheme.clone(), Preference::default())?;
            ensure!(aligned.score() >= end_to_end.score());
        }
    }
    Ok(())
}

#[test]
fn test_mirror() -> Result<()> {
    let workload = [
        ("GAATTCAGTTA", "GGATCGA"),
        ("bcefg", "abcdef"),
        ("azzz", "zzz"),
        ("", "ACGT"),
    ];
    for (seq1, seq2) in workload {
        for scheme in [presets::needleman_wunsch(), presets::alternative()] {
            let forward = global(seq1, seq2, scheme.clone(), Preference::default())?;
            let backward = global(seq2, seq1, scheme, Preference::default())?;
            ensure!(forward == backward.swapped(), "Not a mirror image: {seq1} vs {seq2}");
        }
    }

    // Up/Left ties follow the selector order, which flips its meaning once the inputs are swapped
    let forward = global("AC", "CA", presets::needleman_wunsch(), Preference::default())?;
    let backward = global("CA", "AC", presets::needleman_wunsch(), Preference::default())?;
    ensure!(forward.score() == backward.score());
    ensure!(rendered(&forward) == ("-AC".to_string(), "CA-".to_string()));
    ensure!(rendered(&backward) == ("-CA".to_string(), "AC-".to_string()));
    ensure!(forward != backward.swapped());

    let (seq1, seq2) = ("CAGCCUCGCUUAG", "AAUGCCAUUGACGG");
    let forward = local(seq1, seq2, presets::smith_waterman(), Preference::default())?;
    let backward = local(seq2, seq1, presets::smith_waterman(), Preference::default())?;
    ensure!(forward == backward.swapped());
    Ok(())
}

#[test]
fn test_concurrent_tracebacks() -> Result<()> {
    let config = options(presets::needleman_wunsch(), Preference::default());
    let (seq1, seq2) = (b"GAATTCAGTTA".as_slice(), b"GGATCGA".as_slice());
    let aligner = nw::NeedlemanWunsch::new(seq1, seq2, config)?;
    let expected = aligner.align()?;

    let results = (0..256)
        .into_par_iter()
        .map(|_| aligner.align())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    ensure!(results.iter().all(|x| *x == expected));

    // Different tie-break policies over one shared matrix
    let config = options(presets::smith_waterman(), Preference::default());
    let (seq1, seq2) = (b"ACACACTA".as_slice(), b"AGCACACA".as_slice());
    let aligner = sw::SmithWaterman::new(seq1, seq2, config)?;
    let selectors = [Preference::DIAGONAL_FIRST, Preference::UP_FIRST, Preference::LEFT_FIRST];
    let scores = selectors
        .par_iter()
        .map(|selector| aligner.align_with(*selector).map(|x| *x.score()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    ensure!(scores == vec![10; 3]);
    Ok(())
}
