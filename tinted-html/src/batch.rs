//! Batch highlighting
//!
//!     Many elements are highlighted a slice at a time so a host can interleave other work.
//!     [Batch] is the synchronous driver: each `next()` highlights one slice and hands it
//!     back. [Highlighter::highlight_elements] drives the same batch on tokio, yielding to
//!     the scheduler between slices. Once started it runs to the end; elements keep their
//!     order.

use crate::element::Element;
use crate::highlighter::Highlighter;
use std::slice::ChunksMut;
use tracing::debug;

pub const DEFAULT_SLICE_SIZE: usize = 10;

/// Iterator highlighting one slice of elements per step.
pub struct Batch<'a, E> {
    highlighter: &'a Highlighter<'a>,
    slices: ChunksMut<'a, E>,
}

impl<'a, E: Element> Iterator for Batch<'a, E> {
    type Item = &'a mut [E];

    fn next(&mut self) -> Option<&'a mut [E]> {
        let slice = self.slices.next()?;
        for element in slice.iter_mut() {
            self.highlighter.highlight_element(element);
        }
        Some(slice)
    }
}

impl<'r> Highlighter<'r> {
    /// Batch over `elements` in slices of `slice_size` (zero is treated as one).
    pub fn batch<'a, E: Element>(&'a self, elements: &'a mut [E]) -> Batch<'a, E>
    where
        'r: 'a,
    {
        let size = self.options().slice_size.max(1);
        Batch {
            highlighter: self,
            slices: elements.chunks_mut(size),
        }
    }

    /// Highlight every element, yielding to the tokio scheduler between slices.
    pub async fn highlight_elements<E: Element>(&self, elements: &mut [E]) {
        let total = elements.len();
        let mut done = 0;
        for slice in self.batch(elements) {
            done += slice.len();
            debug!(done, total, "highlighted slice");
            if done < total {
                tokio::task::yield_now().await;
            }
        }
    }
}
