//! Page sequencing state and transition tracking.
//!
//! The navigator owns which page is current and the visual phase of every
//! page. A page change is split in two halves separated by timers: the exit
//! half starts immediately, and the enter half commits once the exit
//! animation has had time to play. Each request is stamped with a generation
//! number; timer callbacks carrying an older generation are ignored, so rapid
//! navigation never leaves two pages on screen.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Length of the exit animation before the next page takes over.
pub const EXIT: Duration = Duration::from_millis(400);
/// Time the enter markers stay on the incoming page.
pub const ENTER: Duration = Duration::from_millis(800);

/// The fixed, ordered set of pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
	Hero,
	Messages,
	Memories,
	Gallery,
	Final,
}

impl PageId {
	pub const ALL: [PageId; 5] = [
		PageId::Hero,
		PageId::Messages,
		PageId::Memories,
		PageId::Gallery,
		PageId::Final,
	];

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn as_str(self) -> &'static str {
		match self {
			PageId::Hero => "hero",
			PageId::Messages => "messages",
			PageId::Memories => "memories",
			PageId::Gallery => "gallery",
			PageId::Final => "final",
		}
	}

	/// DOM id of the page container.
	pub fn element_id(self) -> String {
		format!("page-{}", self.as_str())
	}

	pub fn is_first(self) -> bool {
		self.index() == 0
	}

	pub fn is_last(self) -> bool {
		self.index() == Self::ALL.len() - 1
	}

	pub fn prev(self) -> Option<PageId> {
		self.index().checked_sub(1).map(|i| Self::ALL[i])
	}

	pub fn next(self) -> Option<PageId> {
		Self::ALL.get(self.index() + 1).copied()
	}
}

impl fmt::Display for PageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PageId {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|p| p.as_str() == s).ok_or(())
	}
}

/// Direction of travel through the page sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Forward,
	Backward,
}

impl Direction {
	pub fn between(from: PageId, to: PageId) -> Self {
		if to.index() > from.index() {
			Direction::Forward
		} else {
			Direction::Backward
		}
	}

	/// Class applied to the outgoing page.
	pub fn exit_class(self) -> &'static str {
		match self {
			Direction::Forward => "slide-out",
			Direction::Backward => "fade-out",
		}
	}

	/// Class applied to the incoming page.
	pub fn enter_class(self) -> &'static str {
		match self {
			Direction::Forward => "slide-in",
			Direction::Backward => "fade-in",
		}
	}
}

/// Visual phase of a single page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePhase {
	Hidden,
	Exiting(Direction),
	Active,
	Entering(Direction),
}

impl PagePhase {
	/// Whether the page takes part in layout.
	pub fn is_displayed(self) -> bool {
		!matches!(self, PagePhase::Hidden)
	}

	pub fn is_active(self) -> bool {
		matches!(self, PagePhase::Active | PagePhase::Entering(_))
	}

	pub fn class(self) -> String {
		match self {
			PagePhase::Hidden => "page".to_string(),
			PagePhase::Exiting(d) => format!("page {}", d.exit_class()),
			PagePhase::Active => "page active".to_string(),
			PagePhase::Entering(d) => format!("page active {}", d.enter_class()),
		}
	}
}

/// Which navigation controls a page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlVisibility {
	pub prev: bool,
	pub next: bool,
}

/// A page change that has started its exit half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	pub generation: u64,
	pub from: PageId,
	pub to: PageId,
	pub direction: Direction,
	/// Audio playback should be started alongside this transition.
	pub start_audio: bool,
}

/// Owns the current page and the phase of every page.
#[derive(Clone, Debug)]
pub struct Navigator {
	current: PageId,
	phases: [PagePhase; 5],
	controls_page: PageId,
	generation: u64,
	pending: Option<Transition>,
	autoplay_armed: bool,
}

impl Default for Navigator {
	fn default() -> Self {
		Self::new()
	}
}

impl Navigator {
	/// Starts on the first page with its controls applied.
	pub fn new() -> Self {
		let mut phases = [PagePhase::Hidden; 5];
		phases[PageId::Hero.index()] = PagePhase::Active;
		Self {
			current: PageId::Hero,
			phases,
			controls_page: PageId::Hero,
			generation: 0,
			pending: None,
			autoplay_armed: true,
		}
	}

	pub fn current(&self) -> PageId {
		self.current
	}

	pub fn phase(&self, page: PageId) -> PagePhase {
		self.phases[page.index()]
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Begin moving to `target`, given as a page identifier.
	///
	/// Unknown identifiers and the current page are ignored.
	pub fn request(&mut self, target: &str, audio_playing: bool) -> Option<Transition> {
		let target = target.parse().ok()?;
		self.request_page_change(target, audio_playing)
	}

	/// Begin moving to `target`.
	///
	/// Returns `None` and leaves state untouched when `target` is already the
	/// current page. Otherwise the current page starts exiting and a new
	/// generation supersedes any transition still in flight.
	pub fn request_page_change(&mut self, target: PageId, audio_playing: bool) -> Option<Transition> {
		if target == self.current {
			return None;
		}

		let direction = Direction::between(self.current, target);
		self.generation += 1;
		self.phases[self.current.index()] = PagePhase::Exiting(direction);

		// Only the first move away from the opening page may start the music.
		let start_audio = target != PageId::Hero && self.autoplay_armed && !audio_playing;
		if target != PageId::Hero {
			self.autoplay_armed = false;
		}

		let transition = Transition {
			generation: self.generation,
			from: self.current,
			to: target,
			direction,
			start_audio,
		};
		self.pending = Some(transition);
		Some(transition)
	}

	/// Complete the exit half: hide the outgoing page and bring in the target.
	///
	/// Returns the page that became current, or `None` if `generation` has
	/// been superseded. Controls are left to [`Navigator::apply_controls`].
	pub fn finish_exit(&mut self, generation: u64) -> Option<PageId> {
		let transition = self.pending.filter(|t| t.generation == generation)?;

		for page in PageId::ALL {
			self.phases[page.index()] = if page == transition.to {
				PagePhase::Entering(transition.direction)
			} else {
				PagePhase::Hidden
			};
		}
		self.current = transition.to;
		Some(transition.to)
	}

	/// Complete the enter half by dropping the entering markers.
	pub fn finish_enter(&mut self, generation: u64) {
		let Some(transition) = self.pending.filter(|t| t.generation == generation) else {
			return;
		};
		if let PagePhase::Entering(_) = self.phases[transition.to.index()] {
			self.phases[transition.to.index()] = PagePhase::Active;
		}
		self.pending = None;
	}

	/// Make `page` the one showing controls and return what it shows.
	///
	/// Every other page's controls become hidden.
	pub fn apply_controls(&mut self, page: PageId) -> ControlVisibility {
		self.controls_page = page;
		self.controls(page)
	}

	/// Controls visible on `page`.
	///
	/// Only the page whose controls were last applied shows any; every other
	/// page reports both controls hidden.
	pub fn controls(&self, page: PageId) -> ControlVisibility {
		if page != self.controls_page {
			return ControlVisibility::default();
		}
		ControlVisibility {
			prev: !page.is_first(),
			next: !page.is_last(),
		}
	}

	/// Number of pages currently marked active.
	pub fn active_count(&self) -> usize {
		self.phases.iter().filter(|p| p.is_active()).count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(page: PageId) -> Navigator {
		let mut nav = Navigator::new();
		if page != PageId::Hero {
			let t = nav.request_page_change(page, true).unwrap();
			let now = nav.finish_exit(t.generation).unwrap();
			nav.apply_controls(now);
			nav.finish_enter(t.generation);
		}
		nav
	}

	#[test]
	fn starts_on_hero() {
		let nav = Navigator::new();
		assert_eq!(nav.current(), PageId::Hero);
		assert_eq!(nav.phase(PageId::Hero), PagePhase::Active);
		assert_eq!(nav.active_count(), 1);
	}

	#[test]
	fn page_ids_round_trip_through_strings() {
		for page in PageId::ALL {
			assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
		}
		assert!("contact".parse::<PageId>().is_err());
		assert_eq!(PageId::Gallery.element_id(), "page-gallery");
	}

	#[test]
	fn forward_move_slides() {
		let mut nav = Navigator::new();
		let t = nav.request_page_change(PageId::Memories, true).unwrap();

		assert_eq!(t.direction, Direction::Forward);
		assert_eq!(nav.phase(PageId::Hero), PagePhase::Exiting(Direction::Forward));
		assert_eq!(nav.phase(PageId::Hero).class(), "page slide-out");
	}

	#[test]
	fn backward_move_fades() {
		let mut nav = at(PageId::Gallery);
		let t = nav.request_page_change(PageId::Messages, true).unwrap();

		assert_eq!(t.direction, Direction::Backward);
		assert_eq!(nav.phase(PageId::Gallery).class(), "page fade-out");

		nav.finish_exit(t.generation);
		assert_eq!(nav.phase(PageId::Messages).class(), "page active fade-in");
	}

	#[test]
	fn exit_then_enter_commits_target() {
		let mut nav = Navigator::new();
		let t = nav.request_page_change(PageId::Messages, true).unwrap();
		assert_eq!(nav.current(), PageId::Hero);

		assert_eq!(nav.finish_exit(t.generation), Some(PageId::Messages));
		assert_eq!(nav.current(), PageId::Messages);
		assert_eq!(nav.phase(PageId::Hero), PagePhase::Hidden);
		assert_eq!(nav.phase(PageId::Messages), PagePhase::Entering(Direction::Forward));
		assert_eq!(nav.active_count(), 1);

		nav.finish_enter(t.generation);
		assert_eq!(nav.phase(PageId::Messages), PagePhase::Active);
	}

	#[test]
	fn same_page_request_is_ignored() {
		let mut nav = at(PageId::Memories);
		let before = (nav.generation(), nav.controls(PageId::Memories));

		assert!(nav.request_page_change(PageId::Memories, false).is_none());
		assert!(nav.request("memories", false).is_none());
		assert_eq!((nav.generation(), nav.controls(PageId::Memories)), before);
		assert_eq!(nav.phase(PageId::Memories), PagePhase::Active);
	}

	#[test]
	fn unknown_page_request_is_ignored() {
		let mut nav = Navigator::new();
		assert!(nav.request("guestbook", false).is_none());
		assert_eq!(nav.generation(), 0);
		assert_eq!(nav.phase(PageId::Hero), PagePhase::Active);
	}

	#[test]
	fn controls_follow_position() {
		let hero = at(PageId::Hero).controls(PageId::Hero);
		assert_eq!(hero, ControlVisibility { prev: false, next: true });

		let last = at(PageId::Final).controls(PageId::Final);
		assert_eq!(last, ControlVisibility { prev: true, next: false });

		for middle in [PageId::Messages, PageId::Memories, PageId::Gallery] {
			let c = at(middle).controls(middle);
			assert_eq!(c, ControlVisibility { prev: true, next: true });
		}
	}

	#[test]
	fn controls_stay_with_old_page_until_applied() {
		let mut nav = Navigator::new();
		let t = nav.request_page_change(PageId::Final, true).unwrap();
		nav.finish_exit(t.generation);
		assert_eq!(nav.controls(PageId::Final), ControlVisibility::default());

		let shown = nav.apply_controls(PageId::Final);
		assert_eq!(shown, ControlVisibility { prev: true, next: false });
		assert_eq!(nav.controls(PageId::Hero), ControlVisibility::default());
	}

	#[test]
	fn controls_hidden_on_other_pages() {
		let nav = at(PageId::Gallery);
		for page in PageId::ALL.into_iter().filter(|p| *p != PageId::Gallery) {
			assert_eq!(nav.controls(page), ControlVisibility::default());
		}
	}

	#[test]
	fn stale_timers_are_ignored() {
		let mut nav = Navigator::new();
		let first = nav.request_page_change(PageId::Messages, true).unwrap();
		let second = nav.request_page_change(PageId::Gallery, true).unwrap();
		assert!(second.generation > first.generation);

		assert_eq!(nav.finish_exit(first.generation), None);
		assert_eq!(nav.current(), PageId::Hero);

		assert_eq!(nav.finish_exit(second.generation), Some(PageId::Gallery));
		nav.finish_enter(first.generation);
		assert_eq!(nav.phase(PageId::Gallery), PagePhase::Entering(Direction::Forward));

		nav.finish_enter(second.generation);
		assert_eq!(nav.phase(PageId::Gallery), PagePhase::Active);
		assert_eq!(nav.active_count(), 1);
		assert_eq!(nav.phase(PageId::Messages), PagePhase::Hidden);
	}

	#[test]
	fn leaving_during_enter_keeps_one_page() {
		let mut nav = Navigator::new();
		let first = nav.request_page_change(PageId::Messages, true).unwrap();
		nav.finish_exit(first.generation);

		let second = nav.request_page_change(PageId::Hero, true).unwrap();
		assert_eq!(second.direction, Direction::Backward);
		nav.finish_enter(first.generation);
		assert_eq!(nav.phase(PageId::Messages), PagePhase::Exiting(Direction::Backward));

		nav.finish_exit(second.generation);
		nav.finish_enter(second.generation);
		assert_eq!(nav.current(), PageId::Hero);
		assert_eq!(nav.active_count(), 1);
		assert!(!nav.phase(PageId::Messages).is_displayed());
	}

	#[test]
	fn audio_starts_once_on_first_move_away_from_hero() {
		let mut nav = Navigator::new();

		let t = nav.request_page_change(PageId::Messages, false).unwrap();
		assert!(t.start_audio);
		nav.finish_exit(t.generation);

		let t = nav.request_page_change(PageId::Memories, false).unwrap();
		assert!(!t.start_audio);
		nav.finish_exit(t.generation);

		let t = nav.request_page_change(PageId::Hero, false).unwrap();
		assert!(!t.start_audio);
	}

	#[test]
	fn audio_not_started_when_already_playing() {
		let mut nav = Navigator::new();
		let t = nav.request_page_change(PageId::Final, true).unwrap();
		assert!(!t.start_audio);
		nav.finish_exit(t.generation);

		// Paused later on: moving on still does not restart it.
		let t = nav.request_page_change(PageId::Gallery, false).unwrap();
		assert!(!t.start_audio);
	}
}
