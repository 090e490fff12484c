//! Per-canvas chart registry.
//!
//! Each canvas is either empty or bound to exactly one live chart. Rendering
//! destroys the bound chart before creating its replacement, so a canvas never
//! holds two instances. The registry is single-threaded; callers on the UI
//! thread get destroy-then-create atomicity for free.

use crate::chart::ChartSpec;
use log::{debug, error};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// Draws charts onto named canvases.
pub trait ChartBackend {
    type Handle;
    type Error;

    fn create(&self, canvas_id: &str, spec: &ChartSpec) -> Result<Self::Handle, Self::Error>;
    fn destroy(&self, handle: Self::Handle);
}

/// Sequence number taken when a request for a canvas is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    canvas_id: String,
    seq: u64,
}

impl Ticket {
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}

/// What a finished request does to its canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartUpdate<'a> {
    Draw(&'a ChartSpec),
    Clear,
    Keep,
}

/// How [`ChartRegistry::settle`] handled a finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// A newer request for the canvas was started; nothing was applied.
    Stale,
    Drawn,
    Cleared,
    Kept,
    /// The chart could not be created and the canvas is empty.
    Failed,
}

impl Settled {
    /// Whether the rest of the result (its text) should be shown.
    pub fn applies(&self) -> bool {
        !matches!(self, Settled::Stale)
    }
}

pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: HashMap<String, B::Handle>,
    issued: HashMap<String, u64>,
    failures: BTreeMap<String, String>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
            issued: HashMap::new(),
            failures: BTreeMap::new(),
        }
    }

    /// Replace whatever is drawn on `canvas_id` with a chart of `spec`.
    ///
    /// If creation fails the canvas is left empty.
    pub fn render(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<(), B::Error> {
        if let Some(old) = self.live.remove(canvas_id) {
            debug!("destroying previous chart on '{canvas_id}'");
            self.backend.destroy(old);
        }
        spec.warn_if_misaligned();
        let handle = self.backend.create(canvas_id, spec)?;
        self.live.insert(canvas_id.to_string(), handle);
        Ok(())
    }

    /// Destroy the chart on `canvas_id`, if any. Returns whether one was bound.
    pub fn clear(&mut self, canvas_id: &str) -> bool {
        match self.live.remove(canvas_id) {
            Some(handle) => {
                debug!("clearing chart on '{canvas_id}'");
                self.backend.destroy(handle);
                true
            }
            None => false,
        }
    }

    /// Start a request whose result will be drawn on `canvas_id`.
    pub fn issue_ticket(&mut self, canvas_id: &str) -> Ticket {
        let seq = self.issued.entry(canvas_id.to_string()).or_insert(0);
        *seq += 1;
        Ticket {
            canvas_id: canvas_id.to_string(),
            seq: *seq,
        }
    }

    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        self.issued.get(&ticket.canvas_id) == Some(&ticket.seq)
    }

    pub fn is_bound(&self, canvas_id: &str) -> bool {
        self.live.contains_key(canvas_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> ChartRegistry<B>
where
    B: ChartBackend,
    B::Error: Display,
{
    /// Apply a finished request to its canvas, unless a newer request for
    /// the same canvas was started since `ticket` was issued.
    ///
    /// A creation failure is remembered for the canvas until its next
    /// successful draw or clear.
    pub fn settle(&mut self, ticket: &Ticket, update: ChartUpdate<'_>) -> Settled {
        if !self.is_latest(ticket) {
            debug!(
                "dropping stale result #{} for '{}'",
                ticket.seq, ticket.canvas_id
            );
            return Settled::Stale;
        }

        let canvas_id = ticket.canvas_id.as_str();
        match update {
            ChartUpdate::Keep => Settled::Kept,
            ChartUpdate::Clear => {
                self.clear(canvas_id);
                self.failures.remove(canvas_id);
                Settled::Cleared
            }
            ChartUpdate::Draw(spec) => match self.render(canvas_id, spec) {
                Ok(()) => {
                    self.failures.remove(canvas_id);
                    Settled::Drawn
                }
                Err(e) => {
                    error!("chart on '{canvas_id}' failed: {e}");
                    self.failures.insert(canvas_id.to_string(), e.to_string());
                    Settled::Failed
                }
            },
        }
    }

    /// Canvases whose last draw failed, with the reason, ordered by canvas id.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.failures
            .iter()
            .map(|(canvas, reason)| (canvas.as_str(), reason.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisSide, Series};
    use std::cell::RefCell;

    /// Counts instances; fails creation when asked to.
    #[derive(Default)]
    struct FakeBackend {
        next_id: RefCell<u32>,
        alive: RefCell<Vec<u32>>,
        events: RefCell<Vec<String>>,
        fail: bool,
        fail_on: RefCell<Option<String>>,
    }

    impl ChartBackend for FakeBackend {
        type Handle = u32;
        type Error = String;

        fn create(&self, canvas_id: &str, _spec: &ChartSpec) -> Result<u32, String> {
            if self.fail || self.fail_on.borrow().as_deref() == Some(canvas_id) {
                return Err("no canvas".into());
            }
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.alive.borrow_mut().push(*next);
            self.events.borrow_mut().push(format!("create {canvas_id} #{next}"));
            Ok(*next)
        }

        fn destroy(&self, handle: u32) {
            self.alive.borrow_mut().retain(|h| *h != handle);
            self.events.borrow_mut().push(format!("destroy #{handle}"));
        }
    }

    fn spec() -> ChartSpec {
        ChartSpec::new(vec!["t0".into()])
            .with_series(Series::new("a", vec![1.0], "blue", AxisSide::Primary))
    }

    #[test]
    fn redraw_destroys_before_create() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render("load-chart", &spec()).unwrap();
        registry.render("load-chart", &spec()).unwrap();

        assert_eq!(
            *registry.backend().events.borrow(),
            vec!["create load-chart #1", "destroy #1", "create load-chart #2"]
        );
        assert_eq!(*registry.backend().alive.borrow(), vec![2]);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn canvases_are_independent() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render("a", &spec()).unwrap();
        registry.render("b", &spec()).unwrap();
        assert_eq!(registry.live_count(), 2);
        assert_eq!(registry.backend().alive.borrow().len(), 2);
    }

    #[test]
    fn failed_create_leaves_canvas_empty() {
        let mut registry = ChartRegistry::new(FakeBackend {
            fail: true,
            ..FakeBackend::default()
        });
        assert!(registry.render("a", &spec()).is_err());
        assert!(!registry.is_bound("a"));
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let spec = spec();
        let slow = registry.issue_ticket("cop-yearly-chart");
        let fast = registry.issue_ticket("cop-yearly-chart");

        assert_eq!(registry.settle(&fast, ChartUpdate::Draw(&spec)), Settled::Drawn);
        let late = registry.settle(&slow, ChartUpdate::Draw(&spec));
        assert_eq!(late, Settled::Stale);
        assert!(!late.applies());
        assert_eq!(*registry.backend().alive.borrow(), vec![1]);
    }

    #[test]
    fn stale_clear_leaves_newer_chart() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let spec = spec();
        let slow = registry.issue_ticket("heatgen-chart");
        let fast = registry.issue_ticket("heatgen-chart");
        registry.settle(&fast, ChartUpdate::Draw(&spec));

        assert_eq!(registry.settle(&slow, ChartUpdate::Clear), Settled::Stale);
        assert!(registry.is_bound("heatgen-chart"));
    }

    #[test]
    fn clear_destroys_bound_chart() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render("heatgen-chart", &spec()).unwrap();

        assert!(registry.clear("heatgen-chart"));
        assert!(!registry.is_bound("heatgen-chart"));
        assert!(registry.backend().alive.borrow().is_empty());
        assert!(!registry.clear("heatgen-chart"));
        assert_eq!(
            *registry.backend().events.borrow(),
            vec!["create heatgen-chart #1", "destroy #1"]
        );
    }

    #[test]
    fn chartless_success_empties_canvas() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let spec = spec();
        let series = registry.issue_ticket("heatgen-chart");
        registry.settle(&series, ChartUpdate::Draw(&spec));

        let scalar = registry.issue_ticket("heatgen-chart");
        assert_eq!(registry.settle(&scalar, ChartUpdate::Clear), Settled::Cleared);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn failed_request_keeps_previous_chart() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let spec = spec();
        let first = registry.issue_ticket("load-chart");
        registry.settle(&first, ChartUpdate::Draw(&spec));

        let second = registry.issue_ticket("load-chart");
        assert_eq!(registry.settle(&second, ChartUpdate::Keep), Settled::Kept);
        assert!(registry.is_bound("load-chart"));
        assert_eq!(registry.backend().alive.borrow().len(), 1);
    }

    #[test]
    fn draw_failures_are_tracked_per_canvas() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let spec = spec();
        *registry.backend().fail_on.borrow_mut() = Some("load-chart".into());

        let load = registry.issue_ticket("load-chart");
        assert_eq!(registry.settle(&load, ChartUpdate::Draw(&spec)), Settled::Failed);
        let other = registry.issue_ticket("cop-yearly-chart");
        assert_eq!(registry.settle(&other, ChartUpdate::Draw(&spec)), Settled::Drawn);
        assert_eq!(
            registry.failures().collect::<Vec<_>>(),
            vec![("load-chart", "no canvas")]
        );

        *registry.backend().fail_on.borrow_mut() = None;
        let retry = registry.issue_ticket("load-chart");
        assert_eq!(registry.settle(&retry, ChartUpdate::Draw(&spec)), Settled::Drawn);
        assert_eq!(registry.failures().count(), 0);
    }

    #[test]
    fn tickets_are_per_canvas() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        let a = registry.issue_ticket("a");
        let _b = registry.issue_ticket("b");
        assert!(registry.is_latest(&a));
        assert_eq!(a.canvas_id(), "a");
    }
}
