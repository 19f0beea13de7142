use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quill_core::domain::{Author, BlogPost, NewPost};

use super::words::{FIRST_NAMES, LAST_NAMES, WORDS};

/// Source of synthetic posts.
pub trait PostGenerator: Send {
    /// A random author.
    fn author(&mut self) -> Author;

    /// A create payload: no id, no timestamp.
    fn new_post(&mut self) -> NewPost;

    /// A fully formed post, as if it had been created through the API.
    fn post(&mut self) -> BlogPost {
        BlogPost::new(self.new_post())
    }

    fn posts(&mut self, n: usize) -> Vec<BlogPost> {
        (0..n).map(|_| self.post()).collect()
    }
}

/// Word-salad generator driven by a seeded `StdRng`.
///
/// Two generators built with the same seed yield the same sequence of
/// titles, bodies and authors. Ids and timestamps still differ.
pub struct SeededPostGenerator {
    seed: u64,
    rng: StdRng,
}

impl SeededPostGenerator {
    pub const DEFAULT_SEED: u64 = 0x5EED_B10C;

    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn words(&mut self, min: usize, max: usize) -> Vec<&'static str> {
        let n = self.rng.gen_range(min..=max);
        (0..n).map(|_| self.pick(WORDS)).collect()
    }

    fn sentence(&mut self) -> String {
        let mut sentence = capitalize(&self.words(4, 12).join(" "));
        sentence.push('.');
        sentence
    }

    fn title(&mut self) -> String {
        self.words(2, 5)
            .into_iter()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn paragraph(&mut self) -> String {
        let n = self.rng.gen_range(3..=7);
        (0..n).map(|_| self.sentence()).collect::<Vec<_>>().join(" ")
    }
}

impl Default for SeededPostGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl PostGenerator for SeededPostGenerator {
    fn author(&mut self) -> Author {
        Author::new(self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn new_post(&mut self) -> NewPost {
        NewPost {
            title: self.title(),
            content: self.paragraph(),
            author: self.author(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
