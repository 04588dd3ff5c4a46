//! Color palettes for the quantized temperature classes.

use thiserror::Error;

/// Default diverging palette, cool blue through neutral to warm red.
/// ColorBrewer RdYlBu-9, reversed so colder temperatures come first.
const DIVERGING: [&str; 9] = [
    "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61", "#f46d43",
    "#d73027",
];

#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Non-empty ordered list of fill colors. Index 0 is the coldest class.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// The built-in nine-class diverging temperature palette.
    pub fn diverging() -> Self {
        Self { colors: DIVERGING.iter().map(|&c| c.to_owned()).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // construction guarantees at least one color
    }

    #[inline]
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index]
    }

    #[inline]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::diverging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_orders_cold_to_warm() {
        let p = Palette::diverging();
        assert_eq!(p.len(), 9);
        assert_eq!(p.color(0), "#4575b4");
        assert_eq!(p.color(8), "#d73027");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::<String>::new()), Err(PaletteError::Empty));
    }

    #[test]
    fn custom_palette_preserves_order() {
        let p = Palette::new(["#000", "#fff"]).unwrap();
        assert_eq!(p.colors(), &["#000".to_owned(), "#fff".to_owned()]);
    }
}
