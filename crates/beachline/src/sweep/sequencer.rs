use crate::scene::SceneData;

/// Finite, restartable sequence of directrix values from the scene's top
/// ordinate downward: `d_i = max_y - i * (max_y - min_y) / frames`, `i < frames`.
///
/// Every value is derivable on its own (`directrix_at`); the iterator only
/// tracks which one comes next.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepFrameSequencer {
    top: f64,
    step: f64,
    frames: usize,
    next: usize,
}

impl SweepFrameSequencer {
    pub fn new(scene: &SceneData, frames: usize) -> Self {
        let b = scene.bounds();
        Self::from_extent(b.min.y, b.max.y, frames)
    }

    pub fn from_extent(min_y: f64, max_y: f64, frames: usize) -> Self {
        let step = if frames == 0 {
            0.0
        } else {
            (max_y - min_y) / frames as f64
        };
        Self {
            top: max_y,
            step,
            frames,
            next: 0,
        }
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[inline]
    pub fn directrix_at(&self, index: usize) -> Option<f64> {
        (index < self.frames).then(|| self.top - index as f64 * self.step)
    }

    /// Back to frame 0, for looping playback.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.frames
    }
}

impl Iterator for SweepFrameSequencer {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let d = self.directrix_at(self.next)?;
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.frames.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for SweepFrameSequencer {}
