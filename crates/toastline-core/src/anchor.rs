#![forbid(unsafe_code)]

//! Screen anchor points for the toast stack.

use serde::{Deserialize, Serialize};

/// Where the toast stack is pinned within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Top center.
    TopCenter,
    /// Top-right corner.
    #[default]
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom center.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// All anchors, in the order the demo cycles through them.
    pub const ALL: [Anchor; 6] = [
        Anchor::TopRight,
        Anchor::TopLeft,
        Anchor::BottomRight,
        Anchor::BottomLeft,
        Anchor::TopCenter,
        Anchor::BottomCenter,
    ];

    /// Whether the stack grows upward from the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight
        )
    }

    /// Top-left origin for a box of `width` x `height` placed at this
    /// anchor within a `viewport_width` x `viewport_height` viewport.
    ///
    /// Saturates rather than overflowing when the box is larger than
    /// the viewport.
    pub fn origin(
        self,
        viewport_width: u16,
        viewport_height: u16,
        width: u16,
        height: u16,
        margin: u16,
    ) -> (u16, u16) {
        let x = match self {
            Anchor::TopLeft | Anchor::BottomLeft => margin,
            Anchor::TopCenter | Anchor::BottomCenter => {
                viewport_width.saturating_sub(width) / 2
            }
            Anchor::TopRight | Anchor::BottomRight => {
                viewport_width.saturating_sub(width).saturating_sub(margin)
            }
        };

        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => margin,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => viewport_height
                .saturating_sub(height)
                .saturating_sub(margin),
        };

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_corners() {
        let (x, y) = Anchor::TopLeft.origin(80, 24, 30, 3, 1);
        assert_eq!((x, y), (1, 1));

        let (x, y) = Anchor::TopRight.origin(80, 24, 30, 3, 1);
        assert_eq!((x, y), (49, 1));

        let (x, y) = Anchor::BottomRight.origin(80, 24, 30, 3, 1);
        assert_eq!((x, y), (49, 20));

        let (x, y) = Anchor::TopCenter.origin(80, 24, 30, 3, 1);
        assert_eq!((x, y), (25, 1));
    }

    #[test]
    fn origin_saturates_on_oversized_box() {
        let (x, y) = Anchor::BottomRight.origin(10, 5, 30, 8, 1);
        assert_eq!((x, y), (0, 0));
    }

    #[test]
    fn serde_matches_css_style_names() {
        let json = serde_json::to_string(&Anchor::BottomCenter).unwrap();
        assert_eq!(json, "\"bottom-center\"");
        let parsed: Anchor = serde_json::from_str("\"top-left\"").unwrap();
        assert_eq!(parsed, Anchor::TopLeft);
    }
}
