use glam::DVec2;

/// Axis-aligned rectangle in CSS pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width.max(0.0), height.max(0.0)),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }

    /// Edge-inclusive overlap. Touching rectangles yield a zero-sized rect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.origin.max(other.origin);
        let max = DVec2::new(self.right(), self.bottom()).min(DVec2::new(other.right(), other.bottom()));
        if max.x < min.x || max.y < min.y {
            return None;
        }
        Some(Rect {
            origin: min,
            size: max - min,
        })
    }

    /// Grow (positive) or shrink (negative) each edge by the given margins.
    pub fn inflate(&self, m: &Margins) -> Rect {
        Rect::new(
            self.left() - m.left,
            self.top() - m.top,
            self.size.x + m.left + m.right,
            self.size.y + m.top + m.bottom,
        )
    }
}

/// CSS-style margins in pixels, ordered like `margin`: top right bottom left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Format as an `IntersectionObserver` root margin.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// One observation of a target against the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub const HIDDEN: Visibility = Visibility {
        intersecting: false,
        ratio: 0.0,
    };

    /// Compute visibility the way intersection observers do: intersection
    /// area over target area, with zero-area targets counting as fully
    /// visible when they touch the root.
    pub fn of(target: &Rect, root: &Rect) -> Visibility {
        match target.intersection(root) {
            None => Visibility::HIDDEN,
            Some(hit) => {
                let area = target.area();
                let ratio = if area > 0.0 {
                    (hit.area() / area).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                Visibility {
                    intersecting: true,
                    ratio,
                }
            }
        }
    }

    #[inline]
    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

/// Square ripple centred on the click point, sized to cover the button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_for_click(button: &Rect, client_x: f64, client_y: f64) -> Ripple {
    let size = button.size.x.max(button.size.y);
    Ripple {
        size,
        left: client_x - button.left() - size / 2.0,
        top: client_y - button.top() - size / 2.0,
    }
}

/// Top-left of a tooltip centred above `anchor`, separated by `gap` pixels.
pub fn tooltip_position(anchor: &Rect, tooltip: DVec2, gap: f64) -> DVec2 {
    DVec2::new(
        anchor.left() + anchor.size.x / 2.0 - tooltip.x / 2.0,
        anchor.top() - tooltip.y - gap,
    )
}

#[inline]
pub fn parallax_offset(scroll_y: f64, element_top: f64, factor: f64) -> f64 {
    (scroll_y - element_top) * factor
}
