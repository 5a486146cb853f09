use std::time::Duration;

/// One named, timed segment of the presentation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Scene {
    Introduction,
    Skills,
    Projects,
    Contact,
}

impl Scene {
    /// Scenes in presentation order.
    pub const ALL: [Scene; 4] = [Scene::Introduction, Scene::Skills, Scene::Projects, Scene::Contact];

    pub const COUNT: usize = Self::ALL.len();

    /// Index is reduced modulo the scene count.
    pub fn from_index(index: usize) -> Scene {
        Self::ALL[index % Self::COUNT]
    }

    pub fn index(self) -> usize {
        match self {
            Scene::Introduction => 0,
            Scene::Skills => 1,
            Scene::Projects => 2,
            Scene::Contact => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scene::Introduction => "Introduction",
            Scene::Skills => "Skills",
            Scene::Projects => "Projects",
            Scene::Contact => "Contact",
        }
    }

    /// How long the scene stays on screen during playback.
    pub fn duration(self) -> Duration {
        match self {
            Scene::Introduction => Duration::from_millis(6000),
            Scene::Skills => Duration::from_millis(8000),
            Scene::Projects => Duration::from_millis(10000),
            Scene::Contact => Duration::from_millis(4000),
        }
    }

    /// Large on-screen heading. The introduction shows the person's name instead.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Scene::Introduction => None,
            Scene::Skills => Some("Technical Skills"),
            Scene::Projects => Some("Featured Projects"),
            Scene::Contact => Some("Let's Connect"),
        }
    }
}

/// Dots in a skill's level meter.
pub const LEVEL_DOTS: usize = 5;

/// Lit dots for the skill at `index`; position decides, not the label.
pub fn skill_level(index: usize) -> usize {
    3 + index % 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_are_ordered_and_named() {
        let names: Vec<_> = Scene::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Introduction", "Skills", "Projects", "Contact"]);
        for (i, scene) in Scene::ALL.iter().enumerate() {
            assert_eq!(scene.index(), i);
        }
    }

    #[test]
    fn durations_are_per_scene() {
        assert_eq!(Scene::Introduction.duration(), Duration::from_secs(6));
        assert_eq!(Scene::Skills.duration(), Duration::from_secs(8));
        assert_eq!(Scene::Projects.duration(), Duration::from_secs(10));
        assert_eq!(Scene::Contact.duration(), Duration::from_secs(4));
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Scene::from_index(4), Scene::Introduction);
        assert_eq!(Scene::from_index(7), Scene::Contact);
    }

    #[test]
    fn skill_levels_cycle_three_to_five() {
        let levels: Vec<_> = (0..6).map(skill_level).collect();
        assert_eq!(levels, [3, 4, 5, 3, 4, 5]);
        assert!(levels.iter().all(|l| *l <= LEVEL_DOTS));
    }
}
