#![allow(non_snake_case)]
//! Widgets and headless layout.
//!
//! Widgets are plain constructors returning a `View`. [`layout_and_paint`]
//! turns a view tree into a text [`Scene`], one row per line, plus the hit
//! regions a host needs to route clicks back into the tree.

use std::rc::Rc;

use ripple_core::*;
use unicode_segmentation::UnicodeSegmentation;

pub fn Surface(child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface);
    v.children = vec![child];
    v
}

pub fn Column() -> View {
    View::new(0, ViewKind::Column)
}

/// Bordered group with a title row.
pub fn Card(title: impl Into<String>) -> View {
    let title = title.into();
    View::new(
        0,
        ViewKind::Card {
            title: Some(title.clone()),
        },
    )
    .semantics(Semantics::new(Role::Container).label(title))
}

pub fn Text(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Text {
            text: text.clone(),
            style: TextStyle::Body,
        },
    )
    .semantics(Semantics::new(Role::Text).label(text))
}

pub fn Heading(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Text {
            text: text.clone(),
            style: TextStyle::Heading,
        },
    )
    .semantics(Semantics::new(Role::Heading).label(text))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Cuts `text` to at most `width` graphemes, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    let count = text.graphemes(true).count();
    if width == 0 || count <= width {
        return text.to_string();
    }
    let mut out: String = text.graphemes(true).take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Assigns ids depth-first and paints the tree into rows.
///
/// `columns == 0` disables truncation.
pub fn layout_and_paint(root: &View, columns: usize) -> (Scene, Vec<HitRegion>, Vec<SemNode>) {
    let mut id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut id);

    struct Painter {
        columns: usize,
        scene: Scene,
        hits: Vec<HitRegion>,
        sem: Vec<SemNode>,
    }

    impl Painter {
        fn fit(&self, depth: usize, text: &str) -> String {
            if self.columns == 0 {
                return text.to_string();
            }
            // two cells of rail per nesting level, never below one visible cell
            let avail = self.columns.saturating_sub(depth * 2).max(1);
            truncate(text, avail)
        }

        fn paint(&mut self, v: &View, depth: usize) {
            if let Some(s) = &v.semantics {
                self.sem.push(SemNode {
                    id: v.id,
                    role: s.role,
                    label: s.label.clone(),
                    enabled: s.enabled,
                });
            }
            match &v.kind {
                ViewKind::Surface | ViewKind::Column => {
                    for c in &v.children {
                        self.paint(c, depth);
                    }
                }
                ViewKind::Card { title } => {
                    let title = self.fit(depth, title.as_deref().unwrap_or_default());
                    self.scene.nodes.push(SceneNode::CardTop { depth, title });
                    for c in &v.children {
                        self.paint(c, depth + 1);
                    }
                    self.scene.nodes.push(SceneNode::CardBottom { depth });
                }
                ViewKind::Text { text, .. } => {
                    let text = self.fit(depth, text);
                    self.scene.push_line(depth, text);
                }
                ViewKind::Button { text, on_click } => {
                    let line = self.fit(depth, &format!("[{}] {}", v.id, text));
                    self.scene.push_line(depth, line);
                    self.hits.push(HitRegion {
                        id: v.id,
                        label: text.clone(),
                        on_click: on_click.clone(),
                    });
                }
            }
        }
    }

    let mut painter = Painter {
        columns,
        scene: Scene::default(),
        hits: Vec::new(),
        sem: Vec::new(),
    };
    painter.paint(&root, 0);
    log::trace!(
        "painted {} rows, {} hit regions",
        painter.scene.nodes.len(),
        painter.hits.len()
    );
    (painter.scene, painter.hits, painter.sem)
}
