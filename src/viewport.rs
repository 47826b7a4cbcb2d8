use std::time::Duration;

use egui::{Pos2, Vec2};
use instant::Instant;
use serde::{Deserialize, Serialize};

/// Request to move the viewport center to `target` (canvas coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterRequest {
    pub target: Pos2,
    pub zoom: f32,
    pub duration: Duration,
}

/// Capability of the rendering surface used by [`crate::Controller`].
///
/// Implementations start the movement and return immediately. Nothing waits for the
/// animation to finish.
pub trait Viewport {
    fn center_on(&mut self, request: CenterRequest);
}

/// Viewport that ignores all requests. Handy for headless use of the controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewport;

impl Viewport for NoViewport {
    fn center_on(&mut self, _: CenterRequest) {}
}

/// Pan and zoom interpolation between two viewport states.
#[derive(Debug, Clone)]
pub(crate) struct Animation {
    from_pan: Vec2,
    from_zoom: f32,
    to_pan: Vec2,
    to_zoom: f32,
    started: Instant,
    duration: Duration,
}

impl Animation {
    pub fn new(from: (Vec2, f32), to: (Vec2, f32), duration: Duration) -> Self {
        Self {
            from_pan: from.0,
            from_zoom: from.1,
            to_pan: to.0,
            to_zoom: to.1,
            started: Instant::now(),
            duration,
        }
    }

    /// Returns pan, zoom and whether the animation is finished.
    pub fn sample(&self) -> (Vec2, f32, bool) {
        self.sample_at(self.started.elapsed())
    }

    pub fn sample_at(&self, elapsed: Duration) -> (Vec2, f32, bool) {
        let t = if self.duration.is_zero() {
            1.
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.)
        };
        let k = ease_in_out_cubic(t);

        let pan = self.from_pan + (self.to_pan - self.from_pan) * k;
        let zoom = self.from_zoom + (self.to_zoom - self.from_zoom) * k;
        (pan, zoom, t >= 1.)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4. * t * t * t
    } else {
        1. - (-2. * t + 2.).powi(3) / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_reaches_target() {
        let a = Animation::new(
            (Vec2::ZERO, 1.),
            (Vec2::new(100., -50.), 1.5),
            Duration::from_millis(800),
        );

        let (pan, zoom, done) = a.sample_at(Duration::ZERO);
        assert_eq!(pan, Vec2::ZERO);
        assert_eq!(zoom, 1.);
        assert!(!done);

        let (pan, zoom, done) = a.sample_at(Duration::from_millis(400));
        assert!((pan.x - 50.).abs() < 1e-3);
        assert!((zoom - 1.25).abs() < 1e-3);
        assert!(!done);

        let (pan, zoom, done) = a.sample_at(Duration::from_secs(2));
        assert_eq!(pan, Vec2::new(100., -50.));
        assert_eq!(zoom, 1.5);
        assert!(done);
    }

    #[test]
    fn zero_duration_jumps() {
        let a = Animation::new((Vec2::ZERO, 1.), (Vec2::splat(3.), 2.), Duration::ZERO);
        let (pan, zoom, done) = a.sample_at(Duration::ZERO);
        assert_eq!(pan, Vec2::splat(3.));
        assert_eq!(zoom, 2.);
        assert!(done);
    }
}
