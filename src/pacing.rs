use std::{iter::FusedIterator, thread, time::Duration};


/// Delay inserted between consecutive events by [`Paced`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacingConfig {
    pub step_delay: Duration,
}

impl PacingConfig {

    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    /// No delay, events flow as fast as they are pulled
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}


/// Iterator adapter that sleeps between items, never before the first one
pub struct Paced<I> {
    inner: I,
    config: PacingConfig,
    started: bool,
}

impl<I: Iterator> Paced<I> {
    pub fn new(inner: I, config: PacingConfig) -> Self {
        Self { inner, config, started: false }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for Paced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.started && !self.config.step_delay.is_zero() {
            thread::sleep(self.config.step_delay);
        }
        let item = self.inner.next()?;
        self.started = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Paced<I> {}


/// Extension for pacing any iterator, typically a search's event stream
pub trait PacedExt: Iterator + Sized {
    fn paced(self, config: PacingConfig) -> Paced<Self> {
        Paced::new(self, config)
    }
}

impl<I: Iterator> PacedExt for I {}
