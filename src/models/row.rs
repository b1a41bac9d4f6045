/// Compact bit row holding one binarized scan line (set bit = black pixel)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowSignal {
    size: usize,
    words: Vec<u32>,
}

impl RowSignal {
    /// Create an all-white row of `size` pixels
    pub fn new(size: usize) -> Self {
        Self {
            size,
            words: vec![0; size.div_ceil(32)],
        }
    }

    /// Build a row from alternating run lengths
    ///
    /// `first_black` gives the colour of the first run; colours alternate after it.
    /// Zero-length runs are allowed and simply flip the colour.
    pub fn from_runs(runs: &[usize], first_black: bool) -> Self {
        let mut row = Self::new(runs.iter().sum());
        let mut x = 0;
        let mut black = first_black;
        for &run in runs {
            if black {
                row.set_range(x, x + run);
            }
            x += run;
            black = !black;
        }
        row
    }

    /// Threshold a luminance row: pixels strictly darker than `threshold` are black
    pub fn from_luma(luma: &[u8], threshold: u8) -> Self {
        let mut row = Self::new(luma.len());
        for (x, &v) in luma.iter().enumerate() {
            if v < threshold {
                row.set(x);
            }
        }
        row
    }

    /// Row width in pixels
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if the row has no pixels
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Colour at `x`; out-of-range pixels read as white
    pub fn get(&self, x: usize) -> bool {
        if x >= self.size {
            return false;
        }
        (self.words[x / 32] >> (x % 32)) & 1 == 1
    }

    /// Mark pixel `x` black
    pub fn set(&mut self, x: usize) {
        if x >= self.size {
            return;
        }
        self.words[x / 32] |= 1 << (x % 32);
    }

    /// Mark pixels `start..end` black (clamped to the row)
    pub fn set_range(&mut self, start: usize, end: usize) {
        for x in start..end.min(self.size) {
            self.set(x);
        }
    }

    /// First black pixel at or after `from`, or `size()` if none
    pub fn next_set(&self, from: usize) -> usize {
        self.next_matching(from, true)
    }

    /// First white pixel at or after `from`, or `size()` if none
    pub fn next_unset(&self, from: usize) -> usize {
        self.next_matching(from, false)
    }

    fn next_matching(&self, from: usize, black: bool) -> usize {
        if from >= self.size {
            return self.size;
        }
        let mut word_idx = from / 32;
        // Invert so the search is always for a set bit
        let load = |i: usize| if black { self.words[i] } else { !self.words[i] };
        let mut word = load(word_idx) & (u32::MAX << (from % 32));
        loop {
            if word != 0 {
                let x = word_idx * 32 + word.trailing_zeros() as usize;
                return x.min(self.size);
            }
            word_idx += 1;
            if word_idx >= self.words.len() {
                return self.size;
            }
            word = load(word_idx);
        }
    }

    /// True if every pixel in `start..end` has colour `black`
    ///
    /// `end` past the row end is never satisfied; an empty range always is.
    pub fn is_range(&self, start: usize, end: usize, black: bool) -> bool {
        if end > self.size {
            return false;
        }
        (start..end).all(|x| self.get(x) == black)
    }

    /// Mirror the row left to right
    pub fn reversed(&self) -> Self {
        let mut out = Self::new(self.size);
        for x in 0..self.size {
            if self.get(x) {
                out.set(self.size - 1 - x);
            }
        }
        out
    }

    /// Run lengths from pixel 0, with the colour of the first run
    pub fn runs(&self) -> (Vec<usize>, bool) {
        let mut runs = Vec::new();
        if self.size == 0 {
            return (runs, false);
        }
        let first_black = self.get(0);
        let mut x = 0;
        let mut black = first_black;
        while x < self.size {
            let next = if black { self.next_unset(x) } else { self.next_set(x) };
            runs.push(next - x);
            x = next;
            black = !black;
        }
        (runs, first_black)
    }
}

impl Default for RowSignal {
    fn default() -> Self {
        Self::new(0)
    }
}
