// src/grid/smooth.rs

/// Smallest even integer `>= n` whose only prime factors are 2, 3 and 5.
///
/// These are the lengths the downstream FFT runs fast on. Returns 2 for `n <= 2`.
pub fn next235even(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut nplus = n + (n & 1);
    loop {
        let mut numdiv = nplus;
        while numdiv % 2 == 0 {
            numdiv /= 2;
        }
        while numdiv % 3 == 0 {
            numdiv /= 3;
        }
        while numdiv % 5 == 0 {
            numdiv /= 5;
        }
        if numdiv == 1 {
            return nplus;
        }
        nplus += 2;
    }
}
