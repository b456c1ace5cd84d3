//! Numbers behind the decorative animations: card tilt, count-up counters
//! and background particles.

pub const TILT_MAX_DEG: f64 = 5.0;
pub const TILT_RESET_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

pub const COUNTER_STEPS: f64 = 200.0;
pub const COUNTER_TICK_MS: u64 = 1;

pub const SKILL_FILL_DELAY_MS: u64 = 200;

pub const PARTICLE_COUNT: usize = 20;
const PARTICLE_MAX_DELAY_S: f64 = 20.0;
const PARTICLE_MIN_DURATION_S: f64 = 15.0;
const PARTICLE_DURATION_SPREAD_S: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are relative to the card's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: ((y - center_y) / center_y) * TILT_MAX_DEG,
            rotate_y: ((center_x - x) / center_x) * TILT_MAX_DEG,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Next displayed value of a count-up counter; reaches `target` in about
/// [`COUNTER_STEPS`] ticks and never passes it.
pub fn counter_next(current: u32, target: u32) -> u32 {
    if current >= target {
        return target;
    }
    let increment = target as f64 / COUNTER_STEPS;
    let next = (current as f64 + increment).ceil() as u32;
    next.clamp(current + 1, target)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    /// `random` yields values in `[0, 1)`.
    pub fn random(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            delay_s: random() * PARTICLE_MAX_DELAY_S,
            duration_s: PARTICLE_MIN_DURATION_S + random() * PARTICLE_DURATION_SPREAD_S,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

pub fn particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(&mut random)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_center_is_flat() {
        let tilt = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn test_tilt_corners() {
        let top_left = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0);
        assert_eq!(top_left.rotate_x, -5.0);
        assert_eq!(top_left.rotate_y, 5.0);

        let bottom_right = Tilt::from_pointer(200.0, 100.0, 200.0, 100.0);
        assert_eq!(bottom_right.rotate_x, 5.0);
        assert_eq!(bottom_right.rotate_y, -5.0);
        assert_eq!(
            bottom_right.transform(),
            "perspective(1000px) rotateX(5deg) rotateY(-5deg) translateY(-10px)"
        );
    }

    #[test]
    fn test_tilt_degenerate_rect() {
        assert_eq!(Tilt::from_pointer(3.0, 4.0, 0.0, 100.0), Tilt::default());
    }

    #[test]
    fn test_counter_small_target_counts_by_one() {
        let mut value = 0;
        let mut seen = Vec::new();
        while value < 5 {
            value = counter_next(value, 5);
            seen.push(value);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_counter_large_target_never_overshoots() {
        let target = 250;
        let mut value = 0;
        let mut ticks = 0;
        while value < target {
            let next = counter_next(value, target);
            assert!(next > value);
            assert!(next <= target);
            value = next;
            ticks += 1;
        }
        assert_eq!(value, target);
        assert!(ticks <= COUNTER_STEPS as u32);
    }

    #[test]
    fn test_counter_at_or_past_target() {
        assert_eq!(counter_next(10, 10), 10);
        assert_eq!(counter_next(12, 10), 10);
        assert_eq!(counter_next(0, 0), 0);
    }

    #[test]
    fn test_particles_within_ranges() {
        let mut seed = 0.0;
        let ps = particles(PARTICLE_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(ps.len(), PARTICLE_COUNT);
        for p in &ps {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..20.0).contains(&p.delay_s));
            assert!((15.0..25.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn test_particle_style() {
        let p = Particle::random(&mut || 0.5);
        assert_eq!(
            p.style(),
            "left: 50%; top: 50%; animation-delay: 10s; animation-duration: 20s;"
        );
    }
}
