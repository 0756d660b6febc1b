//! The space-facts carousel: manual previous/next stepping plus a timed
//! auto-advance.

use std::time::Duration;

/// The carousel auto-advances this often unless the user steps it first.
pub const FACT_ROTATION_INTERVAL: Duration = Duration::from_secs(15);

/// The fact library, shown one at a time.
pub const SPACE_FACTS: [&str; 30] = [
    "A day on Venus is longer than its year. It takes Venus 243 Earth days to rotate on its axis but only 225 Earth days to orbit the Sun.",
    "The Sun loses 4 million tons of mass every second due to nuclear fusion, converting matter into energy.",
    "A teaspoonful of neutron star material would weigh about 4 billion tons on Earth.",
    "The footprints left by Apollo astronauts on the Moon will last for at least 100 million years since there's no wind to blow them away.",
    "If you could put Saturn in a giant bathtub, it would float. Its density is less than that of water.",
    "The largest known star, UY Scuti, is so big that it would take light 5 hours to travel around its equator.",
    "There's a planet made of diamonds twice the size of Earth, called 55 Cancri e.",
    "The black hole at the center of our galaxy, Sagittarius A*, weighs as much as 4 million suns.",
    "Light from the Andromeda Galaxy takes 2.5 million years to reach Earth.",
    "Jupiter's Great Red Spot is shrinking, but it's still big enough to fit 2-3 Earths inside it.",
    "The fastest known star, S5-HVS1, is moving at 8% the speed of light.",
    "There's a cloud of alcohol spanning 463 billion kilometers in space (mostly methanol).",
    "The largest known void in space, the Boötes void, could fit 10,000 Milky Way galaxies inside it.",
    "Astronauts grow about 2 inches taller in space due to the lack of gravity.",
    "The most distant object ever seen is a galaxy called GN-z11, observed as it was 13.4 billion years ago.",
    "There are more trees on Earth than stars in the Milky Way galaxy.",
    "The Sun's surface is so hot that a human-sized object would vaporize instantly if placed there.",
    "Some scientists believe that diamonds rain down on Jupiter and Saturn.",
    "The largest known structure in the universe is the Hercules-Corona Borealis Great Wall, spanning 10 billion light-years.",
    "A year on Mercury is only 88 Earth days, but a single day lasts 176 Earth days.",
    "The Olympus Mons on Mars is three times taller than Mount Everest.",
    "There's a planet where it rains glass sideways at 4,300 mph (HD 189733b).",
    "The core of Jupiter is as hot as the Sun's surface.",
    "There are more possible iterations of a game of chess than there are atoms in the universe.",
    "The Milky Way galaxy is moving through space at 1.3 million miles per hour.",
    "There's a planet made entirely of burning ice called Gliese 436 b.",
    "The largest known asteroid, Ceres, is about the size of Texas.",
    "A space suit costs approximately $12 million.",
    "The first photograph of a black hole, M87*, shows it as it appeared 55 million years ago.",
    "There are billions of molecules of water ice floating in space between stars.",
];

/// Cycling index over [`SPACE_FACTS`] with a rotation timer.
///
/// Manual steps do not reset the timer; the next auto-advance still fires on
/// schedule.
#[derive(Clone, Debug, Default)]
pub struct FactsCarousel {
    index: usize,
    since_rotation: Duration,
}

impl FactsCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fact currently on display.
    pub fn current(&self) -> &'static str {
        SPACE_FACTS[self.index]
    }

    /// Position indicator, 1-based: `"7/30"`.
    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.index + 1, SPACE_FACTS.len())
    }

    /// Step forward, wrapping at the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % SPACE_FACTS.len();
    }

    /// Step backward, wrapping at the start.
    pub fn previous(&mut self) {
        self.index = (self.index + SPACE_FACTS.len() - 1) % SPACE_FACTS.len();
    }

    /// Feed elapsed frame time; advances once per full rotation interval.
    /// Returns true if the displayed fact changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.since_rotation += elapsed;
        let mut advanced = false;
        while self.since_rotation >= FACT_ROTATION_INTERVAL {
            self.since_rotation -= FACT_ROTATION_INTERVAL;
            self.next();
            advanced = true;
        }
        advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_fact() {
        let carousel = FactsCarousel::new();
        assert_eq!(carousel.current(), SPACE_FACTS[0]);
        assert_eq!(carousel.counter_text(), "1/30");
    }

    #[test]
    fn test_next_wraps_at_end() {
        let mut carousel = FactsCarousel::new();
        for _ in 0..SPACE_FACTS.len() {
            carousel.next();
        }
        assert_eq!(carousel.current(), SPACE_FACTS[0]);
    }

    #[test]
    fn test_previous_wraps_at_start() {
        let mut carousel = FactsCarousel::new();
        carousel.previous();
        assert_eq!(carousel.current(), SPACE_FACTS[SPACE_FACTS.len() - 1]);
        assert_eq!(carousel.counter_text(), "30/30");
    }

    #[test]
    fn test_previous_undoes_next() {
        let mut carousel = FactsCarousel::new();
        carousel.next();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), SPACE_FACTS[1]);
    }

    #[test]
    fn test_auto_advance_after_interval() {
        let mut carousel = FactsCarousel::new();
        assert!(!carousel.tick(Duration::from_secs(14)));
        assert_eq!(carousel.current(), SPACE_FACTS[0]);
        assert!(carousel.tick(Duration::from_secs(1)));
        assert_eq!(carousel.current(), SPACE_FACTS[1]);
    }

    #[test]
    fn test_long_stall_advances_multiple_steps() {
        let mut carousel = FactsCarousel::new();
        assert!(carousel.tick(Duration::from_secs(46)));
        assert_eq!(carousel.current(), SPACE_FACTS[3]);
    }

    #[test]
    fn test_manual_step_keeps_rotation_schedule() {
        let mut carousel = FactsCarousel::new();
        carousel.tick(Duration::from_secs(14));
        carousel.next();
        // One more second completes the original 15s interval.
        assert!(carousel.tick(Duration::from_secs(1)));
        assert_eq!(carousel.current(), SPACE_FACTS[2]);
    }
}
