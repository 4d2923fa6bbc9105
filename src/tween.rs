/// Linear opacity tween driven by frame timestamps (milliseconds).
///
/// The first call to [`Fade::step`] only records the baseline timestamp, so a
/// fade always starts at `from` on the frame it is first driven.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Fade {
    from: f32,
    to: f32,
    duration: f64,
    start: Option<f64>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FadeStep {
    pub opacity: f32,
    pub done: bool,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: f64) -> Self {
        Self { from, to, duration, start: None }
    }

    pub fn fade_out(duration: f64) -> Self {
        Self::new(1.0, 0.0, duration)
    }

    pub fn fade_in(duration: f64) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    pub fn step(&mut self, now: f64) -> FadeStep {
        let Some(start) = self.start else {
            self.start = Some(now);
            return FadeStep { opacity: self.from, done: false };
        };

        let t = if self.duration > 0.0 {
            ((now - start) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        FadeStep {
            opacity: self.from + (self.to - self.from) * t as f32,
            done: t >= 1.0,
        }
    }
}
