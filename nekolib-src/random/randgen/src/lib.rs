use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` distinct values from `bound`, ascending.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` distinct values from `bound`, in uniformly random order.
pub struct Shuffled<B> {
    pub bound: B,
    pub len: usize,
}

/// A uniformly random permutation of the given items.
pub struct Permute<T>(pub Vec<T>);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Insert(i32, i32),
    Erase(i32),
    Search(i32),
}

/// `len` map operations on keys from `bound`; about half are inserts, the
/// rest split evenly between erases and searches.
pub struct Workload<B> {
    pub bound: B,
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        assert!(*len <= (end - start) as usize, "too few candidates");

        // n = end - start, k = len
        let dense = (2 * len) as i32 > (end - start) / 2;
        let count = if dense { (end - start) as usize - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

impl Gen for Shuffled<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound, len } = self;
        let asc = StrictAsc { bound: bound.clone(), len: *len }.generate(rng);
        Permute(asc).generate(rng)
    }
}

impl<T: Clone> Gen for Permute<T> {
    type Output = Vec<T>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res = self.0.clone();
        res.shuffle(rng);
        res
    }
}

impl Gen for Workload<Range<i32>> {
    type Output = Vec<Op>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound, len } = self;
        (0..*len)
            .map(|_| {
                let key = bound.generate(rng);
                match rng.gen_range(0..4) {
                    0 | 1 => Op::Insert(key, rng.gen()),
                    2 => Op::Erase(key),
                    _ => Op::Search(key),
                }
            })
            .collect()
    }
}
