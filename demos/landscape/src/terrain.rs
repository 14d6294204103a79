//! Synthetic landscape: patchy source populations and scattered receiving
//! cells on a square grid.

use sd_core::{CellCoord, SimRng};
use sd_spatial::{PixelIndex, RasterMeta, SourceRaster};

/// Source raster for one species.
///
/// Each species gets `patches` circular stands of mature trees with radius
/// `patch_radius` cells, placed uniformly at random.
pub fn patchy_raster(
    meta:         &RasterMeta,
    rng:          &mut SimRng,
    patches:      usize,
    patch_radius: i32,
) -> SourceRaster {
    let mut raster = SourceRaster::empty(meta.num_cells);
    for _ in 0..patches {
        let centre = meta.grid_cell(meta.cell_center(PixelIndex(rng.gen_range(1..=meta.num_cells))));
        for dy in -patch_radius..=patch_radius {
            for dx in -patch_radius..=patch_radius {
                if dx * dx + dy * dy > patch_radius * patch_radius {
                    continue;
                }
                // Stands that hang off the map edge are simply clipped.
                if let Some(pixel) = meta.offset_index(centre, dx, dy) {
                    raster.set(pixel, 1);
                }
            }
        }
    }
    raster
}

/// `count` receiving cells at random pixel centres (duplicates allowed).
pub fn receiving_cells(meta: &RasterMeta, rng: &mut SimRng, count: usize) -> Vec<CellCoord> {
    (0..count)
        .map(|_| meta.cell_center(PixelIndex(rng.gen_range(1..=meta.num_cells))))
        .collect()
}

/// Per-cell eligibility: each species is eligible with probability
/// `p_eligible`, independently.
pub fn eligibility(
    rng:        &mut SimRng,
    cells:      usize,
    species:    usize,
    p_eligible: f64,
) -> Vec<Vec<u32>> {
    (0..cells)
        .map(|_| {
            (1..=species as u32)
                .filter(|_| rng.gen_bool(p_eligible))
                .collect()
        })
        .collect()
}
