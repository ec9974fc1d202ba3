use web_time::Instant;

use ripple_core::{Scene, SceneNode};

pub struct Hud {
    pub inspector_enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            frame_count: 0,
            last_frame: None,
            metrics: None,
        }
    }

    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn overlay(&mut self, scene: &mut Scene) {
        self.frame_count += 1;
        let now = Instant::now();
        let since_last = self
            .last_frame
            .replace(now)
            .map(|prev| (now - prev).as_secs_f32() * 1000.0);

        let mut parts = vec![format!("frame: {}", self.frame_count)];
        if let Some(ms) = since_last {
            parts.push(format!("since last: {ms:.1} ms"));
        }
        if let Some(m) = &self.metrics {
            parts.push(format!("compose: {:.2} ms", m.compose_ms));
            parts.push(format!("rows: {}", m.scene_rows));
            parts.push(format!("components: {}", m.components));
            if !m.invalidated.is_empty() {
                parts.push(format!("invalidated: {}", m.invalidated.join(" ")));
            }
        }
        let text = parts.join("  |  ");
        log::debug!("hud: {text}");
        scene.nodes.push(SceneNode::Line { depth: 0, text });
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub compose_ms: f32,
    pub scene_rows: usize,
    pub components: usize,
    /// Component paths whose re-render produced this frame.
    pub invalidated: Vec<String>,
}

pub struct Inspector {
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    pub fn frame(&mut self, scene: &mut Scene) {
        if self.hud.inspector_enabled {
            self.hud.overlay(scene);
        }
    }
}
