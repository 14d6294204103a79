//! Unit tests for sd-spatial.
//!
//! Raster tests use a 5 × 5 grid of 10 m cells with its origin at (0, 0),
//! so pixel centres sit on odd multiples of 5.

#[cfg(test)]
mod helpers {
    use crate::RasterMeta;

    pub fn grid_5x5() -> RasterMeta {
        RasterMeta::new(5, 25, 10.0, 0.0, 0.0).unwrap()
    }
}

// ── Spiral ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spiral {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{Offset, SpiralOffsets};

    #[test]
    fn first_ring_order() {
        let got: Vec<(i32, i32)> = SpiralOffsets::new().take(10).map(|o| (o.x, o.y)).collect();
        assert_eq!(
            got,
            vec![
                (0, 0),
                (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1),
                (2, -1),
            ]
        );
    }

    #[test]
    fn ring_sizes() {
        // Ring r holds 8r offsets (ring 0 is the origin alone).
        let rings: Vec<u32> = SpiralOffsets::new().take(49).map(Offset::ring).collect();
        for r in 0..=3u32 {
            let n = rings.iter().filter(|&&x| x == r).count();
            assert_eq!(n, if r == 0 { 1 } else { 8 * r as usize }, "ring {r}");
        }
    }

    #[test]
    fn step_counter_advances() {
        let mut s = SpiralOffsets::new();
        assert_eq!(s.step(), 0);
        s.next();
        s.next();
        assert_eq!(s.step(), 2);
    }

    #[test]
    fn restart_from_scratch() {
        let a: Vec<Offset> = SpiralOffsets::new().take(30).collect();
        let b: Vec<Offset> = SpiralOffsets::default().take(30).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn offset_norm() {
        assert_eq!(Offset::new(3, -4).norm(), 5.0);
        assert_eq!(Offset::new(-2, 1).ring(), 2);
    }

    proptest! {
        #[test]
        fn rings_non_decreasing_and_unique(r in 1u32..25) {
            let side = (2 * r + 1) as usize;
            let first: Vec<Offset> = SpiralOffsets::new().take(side * side).collect();

            let unique: HashSet<Offset> = first.iter().copied().collect();
            prop_assert_eq!(unique.len(), first.len());

            prop_assert!(first.windows(2).all(|w| w[0].ring() <= w[1].ring()));
            // The first (2r+1)² offsets are exactly the square of radius r.
            prop_assert!(first.iter().all(|o| o.ring() <= r));
        }
    }
}

// ── Grid index mapper ─────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use sd_core::CellCoord;

    use super::helpers::grid_5x5;
    use crate::{PixelIndex, RasterMeta};

    #[test]
    fn corners_map_to_expected_pixels() {
        let g = grid_5x5();
        // Top-left pixel centre.
        assert_eq!(g.pixel_index(CellCoord::new(5.0, 45.0)), Some(PixelIndex(1)));
        // Top-right.
        assert_eq!(g.pixel_index(CellCoord::new(45.0, 45.0)), Some(PixelIndex(5)));
        // Bottom-left.
        assert_eq!(g.pixel_index(CellCoord::new(5.0, 5.0)), Some(PixelIndex(21)));
        // Bottom-right.
        assert_eq!(g.pixel_index(CellCoord::new(45.0, 5.0)), Some(PixelIndex(25)));
    }

    #[test]
    fn cell_center_inverts_pixel_index() {
        let g = grid_5x5();
        for i in 1..=25 {
            let p = PixelIndex(i);
            assert_eq!(g.pixel_index(g.cell_center(p)), Some(p), "pixel {i}");
        }
    }

    #[test]
    fn offsets_above_and_below_are_out_of_bounds() {
        let g = grid_5x5();
        let top_left = g.grid_cell(CellCoord::new(5.0, 45.0));
        assert_eq!(g.offset_index(top_left, 0, 1), None);
        let bottom_right = g.grid_cell(CellCoord::new(45.0, 5.0));
        assert_eq!(g.offset_index(bottom_right, 0, -1), None);
    }

    #[test]
    fn offset_one_cell_south() {
        let g = grid_5x5();
        let centre = g.grid_cell(g.cell_center(PixelIndex(13)));
        assert_eq!(g.offset_index(centre, 0, -1), Some(PixelIndex(18)));
        assert_eq!(g.offset_index(centre, 1, 0), Some(PixelIndex(14)));
    }

    #[test]
    fn index_zero_is_invalid() {
        let g = grid_5x5();
        // One column west of the top-left pixel.
        assert_eq!(g.offset_index(g.grid_cell(CellCoord::new(5.0, 45.0)), -1, 0), None);
    }

    #[test]
    fn east_edge_wraps_to_next_row() {
        let g = grid_5x5();
        // Linear index only: one column east of pixel 5 is pixel 6.
        assert_eq!(g.offset_index(g.grid_cell(CellCoord::new(45.0, 45.0)), 1, 0), Some(PixelIndex(6)));
    }

    #[test]
    fn rectangular_raster() {
        // 4 columns × 2 rows.
        let g = RasterMeta::new(4, 8, 10.0, 100.0, 200.0).unwrap();
        assert_eq!(g.num_rows(), 2);
        assert_eq!(g.pixel_index(CellCoord::new(105.0, 215.0)), Some(PixelIndex(1)));
        assert_eq!(g.pixel_index(CellCoord::new(135.0, 205.0)), Some(PixelIndex(8)));
    }

    /// Expected index of `pixel` moved `(dx, dy)` cells, by integer arithmetic
    /// alone.
    fn shifted(g: &RasterMeta, pixel: usize, dx: i64, dy: i64) -> Option<PixelIndex> {
        let ncol = g.num_cols as i64;
        let row = (pixel as i64 - 1) / ncol - dy;
        let col = (pixel as i64 - 1) % ncol + dx;
        let index = row * ncol + col + 1;
        (index > 0 && index <= g.num_cells as i64).then(|| PixelIndex(index as usize))
    }

    #[test]
    fn fractional_origin_and_cell_sizes() {
        let metas = [
            RasterMeta::new(7, 35, 30.0, 0.3, 0.7).unwrap(),
            RasterMeta::new(7, 35, 0.1, 0.0, 0.0).unwrap(),
            RasterMeta::new(7, 35, 0.3, -12.345, 678.9).unwrap(),
        ];
        for g in metas {
            for p in 1..=g.num_cells {
                let centre = g.cell_center(PixelIndex(p));
                assert_eq!(g.pixel_index(centre), Some(PixelIndex(p)), "{g:?} pixel {p}");
                let base = g.grid_cell(centre);
                for dy in -6..=6 {
                    for dx in -8..=8 {
                        assert_eq!(
                            g.offset_index(base, dx, dy),
                            shifted(&g, p, i64::from(dx), i64::from(dy)),
                            "{g:?} pixel {p} offset ({dx}, {dy})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn far_offsets_stay_in_column() {
        // 0.1 is not exactly representable; hundreds of cells out the
        // accumulated error must not shift the column.
        let g = RasterMeta::new(2000, 2000 * 2000, 0.1, 1234.56, 7890.12).unwrap();
        let p = 1000 * 2000 + 1000;
        let base = g.grid_cell(g.cell_center(PixelIndex(p)));
        for (dx, dy) in [(999, 0), (-999, 0), (0, 999), (0, -999), (733, -517), (-451, 873)] {
            assert_eq!(
                g.offset_index(base, dx, dy),
                shifted(&g, p, i64::from(dx), i64::from(dy)),
                "offset ({dx}, {dy})"
            );
        }
    }

    #[test]
    fn validation() {
        assert!(RasterMeta::new(0, 25, 10.0, 0.0, 0.0).is_err());
        assert!(RasterMeta::new(5, 24, 10.0, 0.0, 0.0).is_err());
        assert!(RasterMeta::new(5, 25, 0.0, 0.0, 0.0).is_err());
        assert!(RasterMeta::new(5, 25, -10.0, 0.0, 0.0).is_err());
        assert!(RasterMeta::new(5, 25, 10.0, f64::NAN, 0.0).is_err());
    }
}

// ── Source rasters ────────────────────────────────────────────────────────────

#[cfg(test)]
mod raster {
    use super::helpers::grid_5x5;
    use crate::{PixelIndex, SourceRaster};

    #[test]
    fn negative_values_are_absent() {
        let r = SourceRaster::from_signed(&[i32::MIN, 0, 7, -1]);
        assert!(!r.is_present(PixelIndex(1)));
        assert_eq!(r.get(PixelIndex(2)), Some(0));
        assert_eq!(r.get(PixelIndex(3)), Some(7));
        assert!(!r.is_present(PixelIndex(4)));
        assert_eq!(r.occupied(), 2);
    }

    #[test]
    fn out_of_range_pixel_is_absent() {
        let r = SourceRaster::from_signed(&[1, 1]);
        assert_eq!(r.get(PixelIndex(3)), None);
    }

    #[test]
    fn pixel_zero_is_absent() {
        let r = SourceRaster::from_signed(&[1, 1]);
        assert_eq!(r.get(PixelIndex(0)), None);
        assert!(!r.is_present(PixelIndex(0)));
    }

    #[test]
    fn set_marks_presence() {
        let mut r = SourceRaster::empty(25);
        r.set(PixelIndex(13), 4);
        assert!(r.is_present(PixelIndex(13)));
        assert_eq!(r.occupied(), 1);
    }

    #[test]
    fn length_checked_against_meta() {
        let g = grid_5x5();
        assert!(SourceRaster::empty(25).check_len(&g).is_ok());
        assert!(SourceRaster::empty(24).check_len(&g).is_err());
    }
}
