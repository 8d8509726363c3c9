//! Area geometry resolution
//!
//! Stateless conversions from an area's screen-space geometry into a
//! consumer's local coordinate space. Nothing here mutates the area or the
//! registry.

use haze_core::{Density, LayoutDirection, Path, Point, Rect, Size};

use crate::area::BlurArea;

/// Area bounds relative to a consumer positioned at `consumer_position`
///
/// Returns `None` when the area is not valid (unmeasured, unplaced, or
/// empty) or when the consumer itself has not been placed yet. Callers skip
/// the area for this frame.
pub fn bounds_in_local(area: &BlurArea, consumer_position: Option<Point>) -> Option<Rect> {
    if !area.is_valid() {
        return None;
    }
    let consumer_position = consumer_position?;
    let size = area.size()?;
    let position = area.position_on_screen()?;

    Some(size.to_rect().translate(position - consumer_position))
}

/// Rebuild `path` as the area's clip outline placed at `rect.origin`
///
/// `path` is cleared first. The shape is evaluated against the area's own
/// size; callers are expected to have checked [`bounds_in_local`] already.
pub fn update_path(
    area: &BlurArea,
    path: &mut Path,
    rect: Rect,
    layout_direction: LayoutDirection,
    density: Density,
) {
    path.reset();
    let size = area.size().unwrap_or(Size::ZERO);
    let outline = area.shape().create_outline(size, layout_direction, density);
    path.add_outline(&outline, rect.top_left().to_vec2());
}

#[cfg(test)]
mod tests {
    use super::*;
    use haze_core::{CornerRadius, CornerSize, DpExt, PathCommand, Shape};

    fn placed(size: Size, position: Point) -> BlurArea {
        BlurArea::new().with_size(size).with_position(position)
    }

    #[test]
    fn test_bounds_translated_into_consumer_space() {
        let area = placed(Size::new(200.0, 100.0), Point::new(50.0, 50.0));
        let bounds = bounds_in_local(&area, Some(Point::new(20.0, 20.0)));
        assert_eq!(bounds, Some(Rect::new(30.0, 30.0, 200.0, 100.0)));
    }

    #[test]
    fn test_bounds_can_be_negative() {
        let area = placed(Size::new(10.0, 10.0), Point::new(0.0, 0.0));
        let bounds = bounds_in_local(&area, Some(Point::new(15.0, 5.0)));
        assert_eq!(bounds, Some(Rect::new(-15.0, -5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_unspecified_size_yields_none() {
        let area = BlurArea::new().with_position(Point::new(50.0, 50.0));
        assert!(bounds_in_local(&area, Some(Point::ZERO)).is_none());
        assert!(bounds_in_local(&area, Some(Point::new(100.0, 100.0))).is_none());
    }

    #[test]
    fn test_unspecified_consumer_position_yields_none() {
        let area = placed(Size::new(10.0, 10.0), Point::ZERO);
        assert!(bounds_in_local(&area, None).is_none());
    }

    #[test]
    fn test_empty_area_yields_none() {
        let area = placed(Size::new(0.0, 10.0), Point::ZERO);
        assert!(bounds_in_local(&area, Some(Point::ZERO)).is_none());
    }

    #[test]
    fn test_update_path_rectangle() {
        let area = placed(Size::new(100.0, 50.0), Point::ZERO);
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        let mut path = Path::circle(Point::new(500.0, 500.0), 3.0);
        update_path(&area, &mut path, rect, LayoutDirection::Ltr, Density::ONE);

        assert_eq!(path.bounds(), Rect::from_ltrb(10.0, 10.0, 110.0, 60.0));
        assert_eq!(path.commands().len(), 5);
    }

    #[test]
    fn test_update_path_rounded() {
        let area = placed(Size::new(100.0, 50.0), Point::ZERO).with_shape(Shape::rounded(4.dp()));
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        let mut path = Path::new();
        update_path(&area, &mut path, rect, LayoutDirection::Ltr, Density::new(2.0));

        assert_eq!(path.bounds(), rect);
        // Starts after the 8px top-left corner
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(18.0, 10.0)));
    }

    #[test]
    fn test_update_path_rtl_rounded() {
        let shape = haze_core::RoundedCornerShape::new(
            CornerSize::Px(6.0),
            CornerSize::ZERO,
            CornerSize::ZERO,
            CornerSize::ZERO,
        );
        let area = placed(Size::new(100.0, 50.0), Point::ZERO).with_shape(shape);
        let outline = area.shape().create_outline(
            Size::new(100.0, 50.0),
            LayoutDirection::Rtl,
            Density::ONE,
        );
        assert_eq!(
            outline,
            haze_core::Outline::Rounded(haze_core::RoundRect::new(
                Rect::new(0.0, 0.0, 100.0, 50.0),
                CornerRadius::new(0.0, 6.0, 0.0, 0.0)
            ))
        );

        let mut path = Path::new();
        update_path(
            &area,
            &mut path,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            LayoutDirection::Rtl,
            Density::ONE,
        );
        // Top-left corner is square in RTL
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::ZERO));
    }

    #[test]
    fn test_update_path_generic() {
        let triangle = Path::new()
            .move_to(50.0, 0.0)
            .line_to(100.0, 50.0)
            .line_to(0.0, 50.0)
            .close();
        let area = placed(Size::new(100.0, 50.0), Point::ZERO).with_shape(Shape::Path(triangle));

        let mut path = Path::new();
        update_path(
            &area,
            &mut path,
            Rect::new(-20.0, 5.0, 100.0, 50.0),
            LayoutDirection::Ltr,
            Density::ONE,
        );

        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(30.0, 5.0)));
        assert_eq!(path.bounds(), Rect::new(-20.0, 5.0, 100.0, 50.0));
    }

    #[test]
    fn test_update_path_keeps_corner_larger_than_half_height() {
        let shape = haze_core::RoundedCornerShape::new(
            CornerSize::Px(40.0),
            CornerSize::ZERO,
            CornerSize::ZERO,
            CornerSize::ZERO,
        );
        let area = placed(Size::new(100.0, 50.0), Point::ZERO).with_shape(shape);

        let mut path = Path::new();
        update_path(
            &area,
            &mut path,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            LayoutDirection::Ltr,
            Density::ONE,
        );

        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(40.0, 0.0)));
    }

    #[test]
    fn test_update_path_matches_asymmetric_outline() {
        let shape = haze_core::RoundedCornerShape::new(
            CornerSize::Px(40.0),
            CornerSize::Px(10.0),
            CornerSize::ZERO,
            CornerSize::Px(5.0),
        );
        let size = Size::new(100.0, 50.0);
        let area = placed(size, Point::ZERO).with_shape(shape);

        let outline = area
            .shape()
            .create_outline(size, LayoutDirection::Ltr, Density::ONE);
        let radius = CornerRadius::new(40.0, 10.0, 0.0, 5.0);
        assert_eq!(
            outline,
            haze_core::Outline::Rounded(haze_core::RoundRect::new(size.to_rect(), radius))
        );

        let mut path = Path::new();
        update_path(&area, &mut path, size.to_rect(), LayoutDirection::Ltr, Density::ONE);

        // Straight segments start and stop exactly at each outline radius
        let points: Vec<Point> = path
            .commands()
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(
            points,
            vec![
                Point::new(radius.top_left, 0.0),
                Point::new(100.0 - radius.top_right, 0.0),
                Point::new(100.0, 50.0 - radius.bottom_right),
                Point::new(radius.bottom_left, 50.0),
                Point::new(0.0, radius.top_left),
            ]
        );
        assert_eq!(path.bounds(), size.to_rect());
    }
}
