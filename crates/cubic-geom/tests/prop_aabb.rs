use cubic_geom::{Aabb, Vec3};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -500.0f32..500.0
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_vec3(), 0.01f32..4.0, 0.01f32..4.0, 0.01f32..4.0)
        .prop_map(|(min, w, h, d)| Aabb::new(min, min + Vec3::new(w, h, d)))
}

proptest! {
    // Overlap is symmetric
    #[test]
    fn intersects_symmetric(a in arb_box(), b in arb_box()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    // A box with positive extent overlaps itself and contains its center
    #[test]
    fn box_overlaps_itself(a in arb_box()) {
        prop_assert!(a.intersects(&a));
        prop_assert!(a.contains_point(a.center()));
    }

    // Boxes separated along X by a gap never overlap
    #[test]
    fn separated_boxes_do_not_intersect(a in arb_box(), gap in 0.01f32..10.0) {
        let shift = a.size().x + gap;
        let b = a.translated(Vec3::new(shift, 0.0, 0.0));
        prop_assert!(!a.intersects(&b));
    }

    // Every block in block_range is actually touched by the closed box
    #[test]
    fn block_range_covers_corners(a in arb_box()) {
        let ((x0, y0, z0), (x1, y1, z1)) = a.block_range();
        prop_assert!(x0 <= x1 && y0 <= y1 && z0 <= z1);
        prop_assert_eq!((x0, y0, z0), a.min.floor_i32());
        prop_assert_eq!((x1, y1, z1), a.max.floor_i32());
    }

    // from_feet keeps the anchor at bottom-center
    #[test]
    fn from_feet_anchor(feet in arb_vec3(), w in 0.1f32..2.0, h in 0.1f32..3.0) {
        let b = Aabb::from_feet(feet, w, h);
        prop_assert!((b.min.y - feet.y).abs() <= 1e-4);
        prop_assert!((b.center().x - feet.x).abs() <= 1e-3);
        prop_assert!((b.center().z - feet.z).abs() <= 1e-3);
        prop_assert!((b.size().y - h).abs() <= 1e-3);
    }
}
