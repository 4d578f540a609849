//! Active-section highlighting for the navigation bar.
//!
//! Sections register a `NodeRef` with the [`ScrollSpy`] found in context. On
//! mount and on every window scroll the spy measures the registered sections,
//! derives a [`HighlightState`] and publishes it through a signal; nav links read
//! their class from that signal. The pure part ([`compute_highlight`]) has no DOM
//! dependency so it can be tested natively.

use leptos::html;
use leptos::prelude::*;

use crate::config::NavLink;

/// Height of the fixed navbar. A section counts as entered once its top passes
/// this far below the top of the viewport.
pub const NAV_OFFSET_PX: f64 = 96.0;

/// Class toggled on the nav link of the current section.
pub const HIGHLIGHT_CLASS: &str = "text-sky-500";

const LINK_BASE_CLASS: &str = "transition-colors hover:text-sky-500";

/// Vertical geometry of a section relative to the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    /// Half-open `[top, top + height)`.
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// What to do when more than one section range contains the scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Every containing section keeps its link lit.
    Overlapping,
    /// Only the last containing section in document order is lit.
    #[default]
    LastWins,
}

/// Derived per-link highlight flags, in nav order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    entries: Vec<(&'static str, bool)>,
}

impl HighlightState {
    /// State before any measurement: the page starts scrolled to the top, so the
    /// first link is lit. Used for SSR so the hydrated markup matches.
    pub fn initial(links: &[NavLink]) -> Self {
        Self {
            entries: links.iter().enumerate().map(|(i, l)| (l.id, i == 0)).collect(),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.entries.iter().any(|(entry, on)| *on && *entry == id)
    }

    #[cfg(test)]
    pub fn active_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter(|(_, on)| *on).map(|(id, _)| *id)
    }
}

/// Compute which links are lit for a scroll offset.
///
/// `sections` must be in document order. Sections without a matching link are
/// ignored.
pub fn compute_highlight<'a>(
    links: &[NavLink],
    sections: impl IntoIterator<Item = (&'a str, SectionRect)>,
    scroll_y: f64,
    policy: OverlapPolicy,
) -> HighlightState {
    let scroll_pos = scroll_y + NAV_OFFSET_PX;
    let mut lit = vec![false; links.len()];

    for (id, rect) in sections {
        let Some(idx) = links.iter().position(|l| l.id == id) else {
            continue;
        };
        if rect.contains(scroll_pos) {
            if policy == OverlapPolicy::LastWins {
                lit.fill(false);
            }
            lit[idx] = true;
        }
    }

    HighlightState {
        entries: links.iter().zip(lit).map(|(l, on)| (l.id, on)).collect(),
    }
}

/// Full class string for a nav link.
pub fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", LINK_BASE_CLASS, HIGHLIGHT_CLASS)
    } else {
        LINK_BASE_CLASS.to_string()
    }
}

type Registry = Vec<(String, NodeRef<html::Section>)>;

/// Shared handle between the page, its sections and the navbar.
#[derive(Clone, Copy)]
pub struct ScrollSpy {
    links: &'static [NavLink],
    policy: OverlapPolicy,
    sections: StoredValue<Registry>,
    state: RwSignal<HighlightState>,
}

impl ScrollSpy {
    pub fn new(links: &'static [NavLink], policy: OverlapPolicy) -> Self {
        Self {
            links,
            policy,
            sections: StoredValue::new(Vec::new()),
            state: RwSignal::new(HighlightState::initial(links)),
        }
    }

    /// Create a spy and make it available to descendant `Section`s.
    pub fn provide(links: &'static [NavLink], policy: OverlapPolicy) -> Self {
        let spy = Self::new(links, policy);
        provide_context(spy);
        spy
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    /// Sections register in render order, which is document order. A repeated
    /// id keeps its original position and takes the new node.
    pub fn register(&self, id: String, node: NodeRef<html::Section>) {
        self.sections.update_value(|sections| {
            match sections.iter_mut().find(|(existing, _)| *existing == id) {
                Some(entry) => entry.1 = node,
                None => sections.push((id, node)),
            }
        });
    }

    pub fn unregister(&self, id: &str) {
        self.sections.update_value(|sections| sections.retain(|(existing, _)| existing != id));
    }

    pub fn registered_ids(&self) -> Vec<String> {
        self.sections
            .with_value(|sections| sections.iter().map(|(id, _)| id.clone()).collect())
    }

    /// Reactive: is the link for `id` lit?
    pub fn is_active(&self, id: &str) -> bool {
        self.state.with(|s| s.is_active(id))
    }

    pub fn state(&self) -> ReadSignal<HighlightState> {
        self.state.read_only()
    }

    /// Publish a freshly computed state; skips the write when nothing changed so
    /// links are not re-rendered on every scroll event.
    pub fn publish(&self, next: HighlightState) {
        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
    }

    /// Compute and publish from already-measured geometry.
    pub fn apply<'a>(&self, sections: impl IntoIterator<Item = (&'a str, SectionRect)>, scroll_y: f64) {
        self.publish(compute_highlight(self.links, sections, scroll_y, self.policy));
    }

    /// Start tracking the window scroll position. The listener is removed when
    /// the calling owner is cleaned up.
    pub fn listen(&self) {
        #[cfg(feature = "hydrate")]
        {
            let spy = *self;
            Effect::new(move |_| {
                spy.refresh();
                let handle = window_event_listener(leptos::ev::scroll, move |_| spy.refresh());
                on_cleanup(move || handle.remove());
            });
        }
    }

    /// Measure every registered section and publish the result.
    #[cfg(feature = "hydrate")]
    pub fn refresh(&self) {
        let scroll_y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);

        let measured: Vec<(String, SectionRect)> = self.sections.with_value(|sections| {
            sections
                .iter()
                .filter_map(|(id, node)| match node.get_untracked() {
                    Some(el) => Some((
                        id.clone(),
                        SectionRect {
                            top: el.offset_top() as f64,
                            height: el.offset_height() as f64,
                        },
                    )),
                    None => {
                        leptos::logging::warn!("scroll spy: section #{} is not mounted, skipping", id);
                        None
                    }
                })
                .collect()
        });

        self.apply(measured.iter().map(|(id, rect)| (id.as_str(), *rect)), scroll_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG;

    /// The five page sections stacked without gaps.
    fn stacked() -> Vec<(&'static str, SectionRect)> {
        vec![
            ("hero", SectionRect { top: 0.0, height: 800.0 }),
            ("about", SectionRect { top: 800.0, height: 600.0 }),
            ("research", SectionRect { top: 1400.0, height: 700.0 }),
            ("publications", SectionRect { top: 2100.0, height: 500.0 }),
            ("contact", SectionRect { top: 2600.0, height: 400.0 }),
        ]
    }

    fn active(state: &HighlightState) -> Vec<&'static str> {
        state.active_ids().collect()
    }

    #[test]
    fn rect_is_half_open() {
        let r = SectionRect { top: 100.0, height: 50.0 };
        assert!(r.contains(100.0));
        assert!(r.contains(149.9));
        assert!(!r.contains(150.0));
        assert!(!r.contains(99.9));
    }

    #[test]
    fn top_of_page_lights_home() {
        let state = compute_highlight(CONFIG.nav, stacked(), 0.0, OverlapPolicy::LastWins);
        assert_eq!(active(&state), vec!["hero"]);
    }

    #[test]
    fn initial_state_matches_top_of_page() {
        let measured = compute_highlight(CONFIG.nav, stacked(), 0.0, OverlapPolicy::Overlapping);
        assert_eq!(HighlightState::initial(CONFIG.nav), measured);
    }

    #[test]
    fn offset_enters_section_early() {
        // 800 - 96: the about section starts exactly at the nav offset.
        let state = compute_highlight(CONFIG.nav, stacked(), 704.0, OverlapPolicy::LastWins);
        assert_eq!(active(&state), vec!["about"]);

        let state = compute_highlight(CONFIG.nav, stacked(), 703.0, OverlapPolicy::LastWins);
        assert_eq!(active(&state), vec!["hero"]);
    }

    #[test]
    fn exactly_one_link_inside_single_range() {
        for (scroll_y, expected) in [(1500.0, "research"), (2200.0, "publications"), (2700.0, "contact")] {
            for policy in [OverlapPolicy::LastWins, OverlapPolicy::Overlapping] {
                let state = compute_highlight(CONFIG.nav, stacked(), scroll_y, policy);
                assert_eq!(active(&state), vec![expected], "scroll_y={scroll_y} policy={policy:?}");
            }
        }
    }

    #[test]
    fn past_the_end_lights_nothing() {
        let state = compute_highlight(CONFIG.nav, stacked(), 5000.0, OverlapPolicy::LastWins);
        assert_eq!(active(&state), Vec::<&str>::new());
    }

    #[test]
    fn sections_without_links_are_skipped() {
        let sections = vec![
            ("intro", SectionRect { top: 0.0, height: 1000.0 }),
            ("about", SectionRect { top: 1000.0, height: 500.0 }),
        ];
        let state = compute_highlight(CONFIG.nav, sections, 0.0, OverlapPolicy::LastWins);
        assert_eq!(active(&state), Vec::<&str>::new());
    }

    #[test]
    fn overlap_policies() {
        let sections = vec![
            ("about", SectionRect { top: 0.0, height: 1000.0 }),
            ("research", SectionRect { top: 500.0, height: 1000.0 }),
        ];
        let all = compute_highlight(CONFIG.nav, sections.clone(), 600.0, OverlapPolicy::Overlapping);
        assert_eq!(active(&all), vec!["about", "research"]);

        let last = compute_highlight(CONFIG.nav, sections, 600.0, OverlapPolicy::LastWins);
        assert_eq!(active(&last), vec!["research"]);
    }

    #[test]
    fn reregistering_keeps_document_order() {
        let owner = Owner::new();
        owner.with(|| {
            let spy = ScrollSpy::new(CONFIG.nav, OverlapPolicy::LastWins);
            let first = NodeRef::new();
            let replacement = NodeRef::new();
            spy.register("about".to_string(), first);
            spy.register("research".to_string(), NodeRef::new());
            spy.register("about".to_string(), replacement);

            assert_eq!(spy.registered_ids(), vec!["about", "research"]);
        });
    }

    #[test]
    fn link_class_appends_highlight() {
        assert_eq!(link_class(false), "transition-colors hover:text-sky-500");
        assert_eq!(link_class(true), "transition-colors hover:text-sky-500 text-sky-500");
    }

    #[test]
    fn spy_publishes_and_registers() {
        let owner = Owner::new();
        owner.with(|| {
            let spy = ScrollSpy::new(CONFIG.nav, OverlapPolicy::LastWins);
            assert!(spy.state().get_untracked().is_active("hero"));

            spy.register("hero".to_string(), NodeRef::new());
            spy.register("about".to_string(), NodeRef::new());
            spy.register("hero".to_string(), NodeRef::new());
            assert_eq!(spy.registered_ids(), vec!["hero", "about"]);
            spy.unregister("about");
            assert_eq!(spy.registered_ids(), vec!["hero"]);

            spy.apply(stacked(), 1500.0);
            let state = spy.state().get_untracked();
            assert_eq!(active(&state), vec!["research"]);
        });
    }
}
