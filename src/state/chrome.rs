use std::collections::BTreeSet;

use tracing::debug;

use crate::config::SiteConfig;

/// Visibility of the floating scroll-to-top button.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTop {
    threshold: f64,
    visible: bool,
}

impl ScrollTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn visible_at(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.visible = self.visible_at(offset);
    }
}

/// Attributes of the CV download anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CvLink {
    pub href: String,
    pub download: String,
    pub hreflang: String,
}

impl CvLink {
    pub fn for_language(config: &SiteConfig, lang: &str) -> Option<Self> {
        let file = config.cv_file(lang)?;
        let download = file.rsplit('/').next().unwrap_or(file).to_string();
        Some(Self {
            href: file.to_string(),
            download,
            hreflang: lang.to_string(),
        })
    }
}

/// A `[data-lottie]` node: element id plus animation path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationNode {
    pub id: String,
    pub path: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    #[default]
    Idle,
    /// Player missing at startup; waiting for the page load signal.
    AwaitingLoad,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoaderStart {
    Ready(Vec<AnimationNode>),
    Deferred,
}

/// Tracks which animation nodes have been handed to the player so each is
/// initialized once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationLoader {
    nodes: Vec<AnimationNode>,
    loaded: BTreeSet<String>,
    phase: LoaderPhase,
}

impl AnimationLoader {
    pub fn new(nodes: Vec<AnimationNode>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.contains(id)
    }

    /// First attempt, made at startup.
    pub fn start(&mut self, player_available: bool) -> LoaderStart {
        if self.nodes.is_empty() {
            self.phase = LoaderPhase::Done;
            return LoaderStart::Ready(Vec::new());
        }
        if player_available {
            LoaderStart::Ready(self.take_pending())
        } else {
            debug!("animation player not available yet, deferring to load signal");
            self.phase = LoaderPhase::AwaitingLoad;
            LoaderStart::Deferred
        }
    }

    /// The one deferred attempt. Later signals are ignored.
    pub fn on_load_signal(&mut self, player_available: bool) -> Vec<AnimationNode> {
        if self.phase != LoaderPhase::AwaitingLoad {
            return Vec::new();
        }
        if player_available {
            self.take_pending()
        } else {
            self.phase = LoaderPhase::Done;
            Vec::new()
        }
    }

    fn take_pending(&mut self) -> Vec<AnimationNode> {
        self.phase = LoaderPhase::Done;
        let pending: Vec<AnimationNode> = self
            .nodes
            .iter()
            .filter(|node| !self.loaded.contains(&node.id))
            .cloned()
            .collect();
        self.loaded.extend(pending.iter().map(|node| node.id.clone()));
        pending
    }
}
