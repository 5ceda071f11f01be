//! Asset load tracking
//!
//! The browser starts every load up front and reports back through
//! callbacks. The game only needs to know when nothing is pending any more;
//! a failed asset counts as settled so the game can run without it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Sound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed(String),
}

/// Handle returned by [`AssetTracker::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(usize);

#[derive(Debug, Clone)]
pub struct Asset {
    pub kind: AssetKind,
    pub url: String,
    pub state: LoadState,
}

#[derive(Debug, Clone, Default)]
pub struct AssetTracker {
    assets: Vec<Asset>,
}

impl AssetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, kind: AssetKind, url: impl Into<String>) -> AssetId {
        self.assets.push(Asset {
            kind,
            url: url.into(),
            state: LoadState::Pending,
        });
        AssetId(self.assets.len() - 1)
    }

    /// Returns false if the asset had already settled
    pub fn mark_loaded(&mut self, id: AssetId) -> bool {
        self.settle(id, LoadState::Loaded)
    }

    /// Returns false if the asset had already settled
    pub fn mark_failed(&mut self, id: AssetId, reason: impl Into<String>) -> bool {
        self.settle(id, LoadState::Failed(reason.into()))
    }

    fn settle(&mut self, id: AssetId, state: LoadState) -> bool {
        match self.assets.get_mut(id.0) {
            Some(asset) if asset.state == LoadState::Pending => {
                asset.state = state;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.get(id.0)
    }

    pub fn is_loaded(&self, id: AssetId) -> bool {
        self.get(id)
            .is_some_and(|asset| asset.state == LoadState::Loaded)
    }

    pub fn pending(&self) -> usize {
        self.assets
            .iter()
            .filter(|asset| asset.state == LoadState::Pending)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Asset> {
        self.assets
            .iter()
            .filter(|asset| matches!(asset.state, LoadState::Failed(_)))
    }
}
