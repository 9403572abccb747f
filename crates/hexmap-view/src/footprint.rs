//! Hex tile footprint geometry.
//!
//! The top face is a flattened hexagon inside a `65 x 32` box. A tile of
//! elevation `h` hangs a side face `h` pixels tall below the right-hand
//! edges of the hexagon.

use glam::IVec2;

/// Size of the top-face bounding box.
pub const FOOTPRINT_SIZE: IVec2 = IVec2::new(65, 32);

/// Top-face hexagon, relative to the tile's top-left corner.
pub const FOOTPRINT_POINTS: [IVec2; 6] = [
    IVec2::new(8, 4),
    IVec2::new(45, 0),
    IVec2::new(64, 10),
    IVec2::new(57, 27),
    IVec2::new(20, 31),
    IVec2::new(0, 22),
];

/// Side-face polygon for a tile of the given elevation: the left and right
/// hexagon corners, then the lower hexagon edges dropped by `elevation - 1`.
pub fn side_polygon(elevation: u32) -> Vec<IVec2> {
    let drop = IVec2::new(0, elevation as i32 - 1);
    let mut points = vec![FOOTPRINT_POINTS[5], FOOTPRINT_POINTS[2]];
    points.extend(FOOTPRINT_POINTS[2..].iter().map(|&p| p + drop));
    points
}

/// Even-odd test of `(x, y)` against a closed polygon.
pub fn point_in_polygon(x: f32, y: f32, polygon: &[IVec2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (xi, yi) = (polygon[i].x as f32, polygon[i].y as f32);
        let (xj, yj) = (polygon[j].x as f32, polygon[j].y as f32);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
