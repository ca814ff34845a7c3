//! Batch matching - parallel on native with the `parallel` feature, sequential otherwise

use crate::matcher::Matcher;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

impl Matcher {
    /// Match every text independently, results in input order
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    pub fn find_all<S>(&self, texts: &[S]) -> Vec<Option<usize>>
    where
        S: AsRef<str> + Sync,
    {
        if texts.len() >= self.config().parallel_threshold {
            // one scratch per rayon worker split
            texts
                .par_iter()
                .map_init(
                    || self.scratch(),
                    |scratch, text| self.find(text.as_ref(), scratch),
                )
                .collect()
        } else {
            self.find_all_sequential(texts)
        }
    }

    /// Match every text independently, results in input order
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    pub fn find_all<S>(&self, texts: &[S]) -> Vec<Option<usize>>
    where
        S: AsRef<str> + Sync,
    {
        self.find_all_sequential(texts)
    }

    fn find_all_sequential<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Option<usize>> {
        let mut scratch = self.scratch();
        texts
            .iter()
            .map(|text| self.find(text.as_ref(), &mut scratch))
            .collect()
    }
}
