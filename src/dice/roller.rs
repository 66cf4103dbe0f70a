use rand::Rng;

pub trait Roller: Send + Sync {
    /// Returns a value in `1..=max`.
    fn roll_in_range(&self, max: u32) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngRoller;

impl ThreadRngRoller {
    pub fn new() -> Self {
        Self
    }
}

impl Roller for ThreadRngRoller {
    fn roll_in_range(&self, max: u32) -> u32 {
        rand::rng().random_range(1..=max)
    }
}
