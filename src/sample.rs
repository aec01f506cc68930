//! Picks which words of a [`WordSequence`](crate::WordSequence) end up in a poem.
//!
//! Indices are drawn uniformly from the corpus. How hard the sampler tries to avoid drawing the
//! same index twice is decided by a [`SamplingPolicy`].

use hashbrown::HashSet;
use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How duplicate draws are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplingPolicy {
    /// Best-effort non-repetition. A draw that was already accepted is drawn again once, and that
    /// second draw is kept no matter what it is. Duplicates can, and on small corpora will,
    /// appear.
    #[default]
    RedrawOnce,
    /// Every index is distinct as long as the corpus has enough words. Once it runs out, the rest
    /// of the draws fall back to [`SamplingPolicy::RedrawOnce`].
    Unique,
}

/// Draws `n` indices in `0..len`.
///
/// An empty corpus (`len == 0`) has nothing to draw from, so the result is empty no matter `n`.
///
/// ```
/// # use poemish::sample::{sample_indices, SamplingPolicy};
/// # use rand::thread_rng;
/// let indices = sample_indices(&mut thread_rng(), 10, 4, SamplingPolicy::Unique);
/// assert_eq!(indices.len(), 4);
/// assert!(indices.iter().all(|&i| i < 10));
/// ```
pub fn sample_indices(
    rng: &mut impl Rng,
    len: usize,
    n: usize,
    policy: SamplingPolicy,
) -> Vec<usize> {
    if len == 0 || n == 0 {
        return Vec::new();
    }

    match policy {
        SamplingPolicy::RedrawOnce => {
            let range = Uniform::new(0, len);
            redraw_once(|| range.sample(rng), n, Vec::with_capacity(n))
        }
        SamplingPolicy::Unique if n <= len => index::sample(rng, len, n).into_vec(),
        SamplingPolicy::Unique => {
            let res = index::sample(rng, len, len).into_vec();
            let range = Uniform::new(0, len);
            redraw_once(|| range.sample(rng), n, res)
        }
    }
}

/// Fills `res` up to `n` indices taken from `draw`, redrawing a duplicate at most once.
fn redraw_once(mut draw: impl FnMut() -> usize, n: usize, mut res: Vec<usize>) -> Vec<usize> {
    let mut accepted: HashSet<usize> = res.iter().copied().collect();

    while res.len() < n {
        let first = draw();
        let i = if accepted.contains(&first) {
            let second = draw();
            trace!(first, second, "redrew duplicate index");
            second
        } else {
            first
        };
        accepted.insert(i);
        res.push(i);
    }

    res
}
