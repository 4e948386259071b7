//! # Layer Projection
//!
//! Keeps an imperative drawing layer (map shapes, list rows, markers) in step
//! with a keyed collection derived from resolved data. The tree algorithms
//! stay pure; this module is the only place that performs add/update/remove
//! calls on a layer, and only for the entries that changed since the last
//! sync.
//!
//! A typical wiring subscribes to the [`crate::events`] bus, recomputes the
//! visible entries from the event, and calls [`LayerProjection::sync`].

use std::collections::BTreeMap;

use log::debug;

/// Something that can hold keyed items and be edited one item at a time.
pub trait Layer {
    type Item;

    fn add(&mut self, id: i64, item: &Self::Item);
    fn update(&mut self, id: i64, item: &Self::Item);
    fn remove(&mut self, id: i64);
}

/// Ids touched by one sync, each list in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerDiff {
    pub added: Vec<i64>,
    pub updated: Vec<i64>,
    pub removed: Vec<i64>,
}

impl LayerDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Compare what a layer holds with what it should hold.
pub fn diff<T: PartialEq>(current: &BTreeMap<i64, T>, next: &BTreeMap<i64, T>) -> LayerDiff {
    let mut result = LayerDiff::default();
    for (id, item) in next {
        match current.get(id) {
            None => result.added.push(*id),
            Some(existing) if existing != item => result.updated.push(*id),
            Some(_) => {}
        }
    }
    result.removed = current
        .keys()
        .filter(|id| !next.contains_key(id))
        .copied()
        .collect();
    result
}

/// A layer plus the items it currently shows.
pub struct LayerProjection<L: Layer> {
    layer: L,
    current: BTreeMap<i64, L::Item>,
}

impl<L> LayerProjection<L>
where
    L: Layer,
    L::Item: Clone + PartialEq,
{
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            current: BTreeMap::new(),
        }
    }

    /// Bring the layer to exactly `next`. When an id appears more than once,
    /// the last item wins.
    pub fn sync<I>(&mut self, next: I) -> LayerDiff
    where
        I: IntoIterator<Item = (i64, L::Item)>,
    {
        let next: BTreeMap<i64, L::Item> = next.into_iter().collect();
        let changes = diff(&self.current, &next);

        for id in &changes.removed {
            self.layer.remove(*id);
        }
        for id in &changes.updated {
            self.layer.update(*id, &next[id]);
        }
        for id in &changes.added {
            self.layer.add(*id, &next[id]);
        }

        if !changes.is_empty() {
            debug!(
                "Layer sync: {} added, {} updated, {} removed",
                changes.added.len(),
                changes.updated.len(),
                changes.removed.len()
            );
        }
        self.current = next;
        changes
    }

    /// Remove everything from the layer.
    pub fn clear(&mut self) -> LayerDiff {
        self.sync(std::iter::empty())
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn into_layer(self) -> L {
        self.layer
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
