use wayfind_core::{Grid, Point};

/// Read-only terrain oracle the search engines query.
///
/// Both answers must be pure: for a fixed implementor, the same point always
/// yields the same answer for the duration of a search call.
pub trait Walkability {
    /// Whether `p` lies within the searchable bounds.
    fn is_inside(&self, p: Point) -> bool;

    /// Whether `p` is inside the bounds and can be entered.
    /// Out-of-bounds points are never walkable.
    fn is_walkable(&self, p: Point) -> bool;
}

impl Walkability for Grid {
    #[inline]
    fn is_inside(&self, p: Point) -> bool {
        Grid::is_inside(self, p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        Grid::is_walkable(self, p)
    }
}

impl<W: Walkability + ?Sized> Walkability for &W {
    #[inline]
    fn is_inside(&self, p: Point) -> bool {
        (**self).is_inside(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}
