//! Host runners (headless and terminal)
//!
//! A [`Host`] owns the root build function and plays the part of the event
//! loop: it takes one event at a time, runs the callback it targets, and
//! recomposes until every invalidated component has re-rendered before it
//! accepts the next event.

mod common;
mod config;
mod error;

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use ripple_core::*;
use ripple_devtools::{Inspector, Metrics};
use ripple_ui::layout_and_paint;

pub use common::parse_command;
pub use config::HostConfig;
pub use error::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Click(u64),
    Redraw,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

pub struct Host {
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    sched: Scheduler,
    inspector: Inspector,
    config: HostConfig,
    frame_cache: Option<Frame>,
}

impl Host {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static, config: HostConfig) -> Self {
        let mut sched = Scheduler::new();
        sched.columns = config.columns;
        let mut inspector = Inspector::new();
        inspector.hud.inspector_enabled = config.inspector;
        Self {
            root: Box::new(root),
            sched,
            inspector,
            config,
            frame_cache: None,
        }
    }

    /// Current frame, recomposed first if anything was invalidated.
    pub fn frame(&mut self) -> &Frame {
        match self.frame_cache.take() {
            Some(frame) if !runtime::has_invalidations() => self.frame_cache.insert(frame),
            _ => {
                let frame = self.settle();
                self.frame_cache.insert(frame)
            }
        }
    }

    pub fn frames_composed(&self) -> u64 {
        self.sched.frames()
    }

    /// Components whose invalidation produced the latest frame, sorted.
    pub fn last_invalidated(&self) -> &[String] {
        self.inspector
            .hud
            .metrics
            .as_ref()
            .map(|m| m.invalidated.as_slice())
            .unwrap_or_default()
    }

    pub fn render_text(&mut self) -> String {
        self.frame().scene.render()
    }

    /// `(id, label)` of every button in paint order.
    pub fn buttons(&mut self) -> Vec<(u64, String)> {
        self.frame()
            .hit_regions
            .iter()
            .map(|h| (h.id, h.label.clone()))
            .collect()
    }

    /// Ids of the buttons labelled `label`, in paint order.
    pub fn button_ids(&mut self, label: &str) -> Vec<u64> {
        self.buttons()
            .into_iter()
            .filter(|(_, l)| l == label)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn click(&mut self, id: u64) -> Result<(), HostError> {
        self.dispatch(HostEvent::Click(id)).map(|_| ())
    }

    /// Processes one event to completion.
    pub fn dispatch(&mut self, event: HostEvent) -> Result<ControlFlow, HostError> {
        match event {
            HostEvent::Click(id) => {
                let on_click = {
                    let frame = self.frame();
                    let hit = common::hit_by_id(frame, id).ok_or(HostError::UnknownTarget(id))?;
                    hit.on_click.clone().ok_or(HostError::NotClickable(id))?
                };
                log::debug!("click {id}");
                on_click();
                // propagate before the next event is accepted
                self.frame();
            }
            HostEvent::Redraw => {
                self.frame_cache = None;
                self.frame();
            }
            HostEvent::Quit => return Ok(ControlFlow::Exit),
        }
        Ok(ControlFlow::Continue)
    }

    fn settle(&mut self) -> Frame {
        let mut invalidated = runtime::take_invalidations();
        let mut passes = 0;
        loop {
            let start = Instant::now();
            let mut frame = self.sched.compose(&mut self.root, layout_and_paint);
            let compose_ms = start.elapsed().as_secs_f32() * 1000.0;
            passes += 1;

            let pending = runtime::has_invalidations();
            if !pending || passes >= self.config.max_recompose_passes.max(1) {
                if pending {
                    log::warn!(
                        "still invalidated after {passes} passes; a component writes state it reads while rendering"
                    );
                    // the frame is final until the next event
                    invalidated.extend(runtime::take_invalidations());
                }
                invalidated.sort();
                invalidated.dedup();
                self.inspector.hud.metrics = Some(Metrics {
                    compose_ms,
                    scene_rows: frame.scene.nodes.len(),
                    components: runtime::mounted_components(),
                    invalidated,
                });
                self.inspector.frame(&mut frame.scene);
                return frame;
            }
            invalidated.extend(runtime::take_invalidations());
        }
    }
}

/// Runs `commands` in order, writing every frame to `out`.
pub fn run_script<W: Write>(
    host: &mut Host,
    commands: &[String],
    out: &mut W,
) -> Result<(), HostError> {
    write!(out, "{}", host.render_text())?;
    for line in commands {
        let event = parse_command(line)?;
        writeln!(out, "> {}", line.trim())?;
        if host.dispatch(event)? == ControlFlow::Exit {
            break;
        }
        write!(out, "{}", host.render_text())?;
    }
    Ok(())
}

/// Interactive loop over stdin/stdout. Bad input is reported and skipped.
pub fn run_terminal_app(
    root: impl FnMut(&mut Scheduler) -> View + 'static,
    config: HostConfig,
) -> anyhow::Result<()> {
    let mut host = Host::new(root, config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    log::info!("terminal host started");

    write!(stdout, "{}> ", host.render_text()).context("writing first frame")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            write!(stdout, "> ")?;
            stdout.flush()?;
            continue;
        }
        let flow = parse_command(&line).and_then(|event| host.dispatch(event));
        match flow {
            Ok(ControlFlow::Exit) => break,
            Ok(ControlFlow::Continue) => write!(stdout, "{}", host.render_text())?,
            Err(e) => {
                log::warn!("{e}");
                writeln!(stdout, "error: {e}")?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    log::info!("terminal host stopped after {} frames", host.frames_composed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_ui::{Button, Card, Column, Surface, Text};

    fn counter_app() -> impl FnMut(&mut Scheduler) -> View {
        |_s| {
            Surface(component("Counter", || {
                let count = remember_signal(|| 0u64);
                Card(format!("Count: {}", count.get())).child(Button("Increment", move || {
                    count.update(|c| *c += 1)
                }))
            }))
        }
    }

    #[test]
    fn click_recomposes_before_returning() {
        let mut host = Host::new(counter_app(), HostConfig::default());
        assert!(host.render_text().contains("Count: 0"));
        let frames = host.frames_composed();

        let id = host.button_ids("Increment")[0];
        host.click(id).unwrap();
        assert_eq!(host.frames_composed(), frames + 1);
        host.click(id).unwrap();
        assert!(host.render_text().contains("Count: 2"));
    }

    #[test]
    fn idle_frames_are_cached() {
        let mut host = Host::new(counter_app(), HostConfig::default());
        host.frame();
        host.frame();
        assert_eq!(host.frames_composed(), 1);
        host.dispatch(HostEvent::Redraw).unwrap();
        assert_eq!(host.frames_composed(), 2);
    }

    #[test]
    fn unknown_and_inert_targets_error() {
        let mut host = Host::new(
            |_s: &mut Scheduler| {
                Column().with_children(vec![
                    Text("label"),
                    View::new(
                        0,
                        ViewKind::Button {
                            text: "inert".into(),
                            on_click: None,
                        },
                    ),
                ])
            },
            HostConfig::default(),
        );
        assert!(matches!(host.click(99), Err(HostError::UnknownTarget(99))));
        let inert = host.button_ids("inert")[0];
        assert!(matches!(host.click(inert), Err(HostError::NotClickable(_))));
    }

    #[test]
    fn render_loop_is_cut_off() {
        let config = HostConfig {
            max_recompose_passes: 3,
            ..HostConfig::default()
        };
        let mut host = Host::new(
            |_s: &mut Scheduler| {
                component("Runaway", || {
                    let ticks = remember_signal(|| 0u64);
                    let seen = ticks.get();
                    ticks.set(seen + 1);
                    Text(format!("ticks: {seen}"))
                })
            },
            config,
        );
        host.frame();
        assert_eq!(host.frames_composed(), 3);
        assert!(!runtime::has_invalidations());

        host.render_text();
        host.buttons();
        assert_eq!(host.frames_composed(), 3);
        assert_eq!(host.last_invalidated(), ["/Runaway#0".to_string()]);

        host.dispatch(HostEvent::Redraw).unwrap();
        assert_eq!(host.frames_composed(), 6);
    }

    #[test]
    fn frame_carries_semantics_for_every_widget() {
        let mut host = Host::new(counter_app(), HostConfig::default());
        let id = host.button_ids("Increment")[0];
        let frame = host.frame();
        let button = frame
            .semantics_nodes
            .iter()
            .find(|n| n.role == Role::Button)
            .unwrap();
        assert_eq!(button.id, id);
        assert_eq!(button.label.as_deref(), Some("Increment"));
        assert!(
            frame
                .semantics_nodes
                .iter()
                .any(|n| n.role == Role::Container && n.label.as_deref() == Some("Count: 0"))
        );
    }

    #[test]
    fn script_stops_at_quit() {
        let mut host = Host::new(counter_app(), HostConfig::default());
        let id = host.button_ids("Increment")[0];
        let commands = vec![format!("click {id}"), "quit".into(), format!("click {id}")];
        let mut out = Vec::new();
        run_script(&mut host, &commands, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Count: 1"));
        assert!(!text.contains("Count: 2"));
        assert!(text.contains("> quit"));
    }

    #[test]
    fn inspector_line_is_appended_when_enabled() {
        let config = HostConfig {
            inspector: true,
            ..HostConfig::default()
        };
        let mut host = Host::new(counter_app(), config);
        let id = host.button_ids("Increment")[0];
        host.click(id).unwrap();
        let text = host.render_text();
        assert!(text.contains("frame: 2"));
        assert!(text.contains("invalidated: /Counter#0"));
    }
}
