use std::fmt;
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Body,
    Heading,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Column,
    Card {
        title: Option<String>,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
}

impl fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Card { title } => f.debug_struct("Card").field("title", title).finish(),
            ViewKind::Text { text, style } => f
                .debug_struct("Text")
                .field("text", text)
                .field("style", style)
                .finish(),
            ViewKind::Button { text, on_click } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            children: vec![],
            semantics: None,
        }
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn child(mut self, kid: View) -> Self {
        self.children.push(kid);
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
}

/// Painted output of one frame: a list of text rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// One row of content, `depth` cards deep.
    Line { depth: usize, text: String },
    CardTop { depth: usize, title: String },
    CardBottom { depth: usize },
}

impl Scene {
    pub fn push_line(&mut self, depth: usize, text: impl Into<String>) {
        self.nodes.push(SceneNode::Line {
            depth,
            text: text.into(),
        });
    }

    /// Draws the scene with box rails for nested cards.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            let (depth, body) = match node {
                SceneNode::Line { depth, text } => (*depth, text.clone()),
                SceneNode::CardTop { depth, title } if title.is_empty() => (*depth, "┌".into()),
                SceneNode::CardTop { depth, title } => (*depth, format!("┌ {title}")),
                SceneNode::CardBottom { depth } => (*depth, "└".into()),
            };
            for _ in 0..depth {
                out.push_str("│ ");
            }
            out.push_str(&body);
            out.push('\n');
        }
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.nodes.iter().any(|n| match n {
            SceneNode::Line { text, .. } => text.contains(needle),
            SceneNode::CardTop { title, .. } => title.contains(needle),
            SceneNode::CardBottom { .. } => false,
        })
    }
}
