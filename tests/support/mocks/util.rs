// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use coinpress_core::application::ports::util::SlugGenerator;
use coinpress_core::infrastructure::util::DefaultSlugGenerator;

#[derive(Clone)]
pub struct DummyClock;

impl coinpress_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Real generator that also counts how often it was asked to normalize.
#[derive(Default)]
pub struct CountingSlugGenerator {
    calls: AtomicUsize,
}

impl CountingSlugGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SlugGenerator for CountingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DefaultSlugGenerator.slugify(input)
    }
}
