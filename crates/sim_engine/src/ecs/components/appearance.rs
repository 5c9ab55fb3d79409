//! Display components

use crate::ecs::Component;

/// RGB colour of an object as drawn by the display layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Colour {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Colour {
    /// Create a colour from its channels
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Component for Colour {
    const NAME: &'static str = "colour";
}
