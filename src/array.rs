use rand::Rng;
use crate::config::{VALUE_MAX, VALUE_MIN};

/// The values being sorted. Length stays fixed between resets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortArray {
    values: Vec<i32>,
}

impl SortArray {
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> SortArray {
        let mut arr = SortArray { values: vec![0; size] };
        arr.regenerate(rng);
        arr
    }

    // values in [VALUE_MIN, VALUE_MAX] so every bar clears the minimum height
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for v in self.values.iter_mut() {
            *v = rng.gen_range(VALUE_MIN..=VALUE_MAX);
        }
    }

    pub fn resize<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        self.values.resize(size, 0);
        self.regenerate(rng);
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<i32>> for SortArray {
    fn from(values: Vec<i32>) -> Self {
        SortArray { values }
    }
}

impl std::ops::Index<usize> for SortArray {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.values[index]
    }
}
