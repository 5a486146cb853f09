//! Scene cycler: a bounded index over the fixed scene list, advanced either
//! by a per-scene timer while playing or by manual navigation.

use std::time::Duration;

use crate::scene::Scene;
use crate::state::Playback;

/// Everything that can happen to the cycler.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
    Tick(Duration),
    Next,
    Previous,
    Jump(usize),
    TogglePlay,
}

pub struct SceneCycler {
    index: usize,
    playback: Playback,
}

impl Default for SceneCycler {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCycler {
    pub fn new() -> Self {
        Self {
            index: 0,
            playback: Playback::Paused,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scene(&self) -> Scene {
        Scene::from_index(self.index)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Time left before the pending advancement fires, if one is armed.
    pub fn pending(&self) -> Option<Duration> {
        match self.playback {
            Playback::Paused => None,
            Playback::Playing { remaining } => Some(remaining),
        }
    }

    /// Applies an event and returns the new index if it changed.
    pub fn handle(&mut self, event: Event) -> Option<usize> {
        match event {
            Event::Tick(dt) => self.tick(dt),
            Event::Next => self.next(),
            Event::Previous => self.previous(),
            Event::Jump(i) => self.jump(i),
            Event::TogglePlay => {
                self.toggle_play();
                None
            }
        }
    }

    pub fn play(&mut self) {
        if !self.is_playing() {
            self.arm();
        }
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to((self.index + 1) % Scene::COUNT)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.go_to((self.index + Scene::COUNT - 1) % Scene::COUNT)
    }

    pub fn jump(&mut self, index: usize) -> Option<usize> {
        self.go_to(index % Scene::COUNT)
    }

    /// Advances the pending timer by `dt`. Overshoot carries into the next
    /// scene's delay, so a long frame still visits every scene in order.
    pub fn tick(&mut self, dt: Duration) -> Option<usize> {
        let Playback::Playing { remaining } = self.playback else {
            return None;
        };

        let mut remaining = remaining;
        let mut budget = dt;
        let start = self.index;
        while budget >= remaining {
            budget -= remaining;
            self.index = (self.index + 1) % Scene::COUNT;
            remaining = self.scene().duration();
        }
        self.playback = Playback::Playing { remaining: remaining - budget };

        (self.index != start).then_some(self.index)
    }

    // Manual navigation cancels the pending advancement and, while playing,
    // re-arms it with the destination scene's own delay.
    fn go_to(&mut self, index: usize) -> Option<usize> {
        let changed = index != self.index;
        self.index = index;
        if self.is_playing() {
            self.arm();
        }
        changed.then_some(index)
    }

    fn arm(&mut self) {
        self.playback = Playback::Playing {
            remaining: self.scene().duration(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_paused_at_first_scene() {
        let cycler = SceneCycler::new();
        assert_eq!(cycler.index(), 0);
        assert!(!cycler.is_playing());
        assert_eq!(cycler.pending(), None);
    }

    #[test]
    fn next_and_previous_wrap_from_every_index() {
        for i in 0..Scene::COUNT {
            let mut cycler = SceneCycler::new();
            cycler.jump(i);
            cycler.next();
            assert_eq!(cycler.index(), (i + 1) % Scene::COUNT);

            let mut cycler = SceneCycler::new();
            cycler.jump(i);
            cycler.previous();
            assert_eq!(cycler.index(), (i + Scene::COUNT - 1) % Scene::COUNT);
        }
    }

    #[test]
    fn next_four_times_wraps_to_start() {
        let mut cycler = SceneCycler::new();
        let visited: Vec<_> = (0..3).map(|_| cycler.next()).collect();
        assert_eq!(visited, [Some(1), Some(2), Some(3)]);
        assert_eq!(cycler.next(), Some(0));
    }

    #[test]
    fn toggling_play_arms_then_cancels() {
        let mut cycler = SceneCycler::new();
        cycler.toggle_play();
        assert_eq!(cycler.pending(), Some(ms(6000)));

        cycler.tick(ms(5000));
        cycler.toggle_play();
        assert_eq!(cycler.pending(), None);

        assert_eq!(cycler.tick(ms(60_000)), None);
        assert_eq!(cycler.index(), 0);
    }

    #[test]
    fn play_twice_does_not_rearm() {
        let mut cycler = SceneCycler::new();
        cycler.play();
        cycler.tick(ms(1000));
        cycler.play();
        assert_eq!(cycler.pending(), Some(ms(5000)));
    }

    #[test]
    fn automatic_cycle_visits_scenes_in_order() {
        let mut cycler = SceneCycler::new();
        cycler.play();
        let mut visited = vec![cycler.index()];
        for _ in 0..4 {
            let delay = cycler.pending().unwrap();
            assert_eq!(cycler.tick(delay - ms(1)), None);
            visited.push(cycler.tick(ms(1)).unwrap());
        }
        assert_eq!(visited, [0, 1, 2, 3, 0]);
    }

    #[test]
    fn contact_scene_advances_after_four_seconds() {
        let mut cycler = SceneCycler::new();
        cycler.jump(3);
        cycler.play();
        assert_eq!(cycler.tick(ms(3999)), None);
        assert_eq!(cycler.tick(ms(1)), Some(0));
        assert_eq!(cycler.pending(), Some(ms(6000)));
    }

    #[test]
    fn frame_ticks_accumulate() {
        let mut cycler = SceneCycler::new();
        cycler.jump(3);
        cycler.play();
        let frame = Duration::from_secs(1) / 60;
        let mut changes = Vec::new();
        for _ in 0..241 {
            if let Some(i) = cycler.tick(frame) {
                changes.push(i);
            }
        }
        assert_eq!(changes, [0]);
    }

    #[test]
    fn long_tick_carries_overshoot_in_order() {
        let mut cycler = SceneCycler::new();
        cycler.play();
        // 6s intro + 8s skills + 1s into projects
        assert_eq!(cycler.tick(ms(15_000)), Some(2));
        assert_eq!(cycler.pending(), Some(ms(9000)));
    }

    #[test]
    fn jump_while_playing_uses_destination_delay() {
        let mut cycler = SceneCycler::new();
        cycler.play();
        cycler.tick(ms(2000));
        assert_eq!(cycler.jump(2), Some(2));
        assert_eq!(cycler.pending(), Some(ms(10_000)));
    }

    #[test]
    fn jump_reduces_out_of_range_index() {
        let mut cycler = SceneCycler::new();
        assert_eq!(cycler.jump(6), Some(2));
        assert_eq!(cycler.jump(2), None);
    }

    #[test]
    fn manual_navigation_while_paused_stays_paused() {
        let mut cycler = SceneCycler::new();
        cycler.next();
        cycler.previous();
        assert!(!cycler.is_playing());
        assert_eq!(cycler.tick(ms(100_000)), None);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut cycler = SceneCycler::new();
        assert_eq!(cycler.handle(Event::Next), Some(1));
        assert_eq!(cycler.handle(Event::Previous), Some(0));
        assert_eq!(cycler.handle(Event::Jump(3)), Some(3));
        assert_eq!(cycler.handle(Event::TogglePlay), None);
        assert!(cycler.is_playing());
        assert_eq!(cycler.handle(Event::Tick(ms(4000))), Some(0));
    }
}
