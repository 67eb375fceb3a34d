use crate::sampling::types::Color;

/// Running per-channel sum of 16-bit colors.
///
/// Sums are `u64`, so even a full 8K frame of white cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorAccumulator {
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl ColorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, color: Color) {
        self.red += color.red as u64;
        self.green += color.green as u64;
        self.blue += color.blue as u64;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Floor of the per-channel mean, `None` when nothing was added.
    pub fn mean(&self) -> Option<Color> {
        if self.count == 0 {
            return None;
        }
        Some(Color::new(
            (self.red / self.count) as u16,
            (self.green / self.count) as u16,
            (self.blue / self.count) as u16,
        ))
    }
}

impl Extend<Color> for ColorAccumulator {
    fn extend<T: IntoIterator<Item = Color>>(&mut self, iter: T) {
        for color in iter {
            self.add(color);
        }
    }
}

impl FromIterator<Color> for ColorAccumulator {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
