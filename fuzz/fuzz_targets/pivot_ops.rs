#![no_main]
use libfuzzer_sys::fuzz_target;
use pstable::PrefixSumTable;

fuzz_target!(|data: (Vec<u16>, usize, usize)| {
    let (raw_counts, a, b) = data;
    if raw_counts.len() < 2 {
        return;
    }

    let counts: Vec<u64> = raw_counts.iter().map(|&c| c as u64).collect();
    let pst = PrefixSumTable::<u8, u64>::from_counts(&counts).unwrap();
    let sigma = pst.alphabet_size();

    let c = pst.entries();
    assert_eq!(c[0], 0);
    assert_eq!(c[sigma], counts.iter().sum::<u64>());
    assert!(c.windows(2).all(|w| w[0] <= w[1]));

    let begin = a % (sigma - 1);
    let end = begin + 1 + b % (sigma - 1 - begin);

    let p = pst.pivot(begin, end);
    assert!(begin <= p && p < end, "pivot {} outside [{}, {})", p, begin, end);

    let restored = PrefixSumTable::<u8, u64>::from_bytes(&pst.to_bytes()).unwrap();
    assert_eq!(restored, pst);
});
