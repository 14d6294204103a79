//! landscape: seed dispersal over a synthetic forest.
//!
//! Builds a 60 × 60 grid of 100 m cells with patchy stands of four tree
//! species, scatters receiving cells across it, and runs one succession
//! step of seed dispersal.  Results go to `output/landscape/`.
//!
//! ```text
//! cargo run -p landscape --release [-- config.json]
//! RUST_LOG=debug cargo run -p landscape
//! ```
//!
//! The optional JSON file deserializes into `DispersalConfig`; missing
//! fields take their defaults.

mod terrain;

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use sd_core::{CellRngs, DispersalConfig, SimRng, SpeciesCode};
use sd_engine::{DispersalBuilder, DispersalObserver, ProgressReporter, RunSummary, SearchBound};
use sd_output::{ArrivalWriter, CsvWriter, SweepLogObserver, write_matrix};
use sd_spatial::{Offset, RasterMeta};
use sd_species::load_species_reader;

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIDE:       usize = 60;
const CELL_SIZE:       f64   = 100.0;
const RECEIVING_CELLS: usize = 400;
const SEED:            u64   = 42;
const P_ELIGIBLE:      f64   = 0.6;
const OUTPUT_DIR:      &str  = "output/landscape";

// ── Species CSV ───────────────────────────────────────────────────────────────

// Distances in metres.  Aspen seed is wind-borne and travels furthest.
const SPECIES_CSV: &str = "\
species_code,species,effective_distance,max_distance\n\
1,Abie_bal,30,160\n\
2,Pice_gla,100,303\n\
3,Pinu_ban,30,100\n\
4,Popu_tre,1000,5000\n\
";

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Drives console progress and the CSV sweep log from one run.
struct DemoObserver<W: ArrivalWriter> {
    progress:  ProgressReporter,
    sweep_log: SweepLogObserver<W>,
    offsets:   u64,
}

impl<W: ArrivalWriter> DispersalObserver for DemoObserver<W> {
    fn on_run_start(&mut self, bound: SearchBound, cells: usize, species: usize) {
        self.progress.on_run_start(bound, cells, species);
        self.sweep_log.on_run_start(bound, cells, species);
    }

    fn on_offset(&mut self, step: u64, offset: Offset, distance: f64, swept: bool) {
        self.offsets += 1;
        self.progress.on_offset(step, offset, distance, swept);
    }

    fn on_species_complete(&mut self, step: u64, distance: f64, retired: &[SpeciesCode], bound: SearchBound) {
        self.progress.on_species_complete(step, distance, retired, bound);
        self.sweep_log.on_species_complete(step, distance, retired, bound);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.progress.on_run_end(summary);
        self.sweep_log.on_run_end(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<DispersalConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
            let config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))?;
            Ok(config)
        }
        None => Ok(DispersalConfig { seed: SEED, ..DispersalConfig::default() }),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    config.validate()?;
    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    println!("=== landscape: rust_sd seed dispersal ===");
    println!(
        "Grid: {GRID_SIDE} × {GRID_SIDE} cells of {CELL_SIZE} m  |  Receiving cells: {RECEIVING_CELLS}  |  Seed: {}",
        config.seed
    );
    println!(
        "Kernel: k = {}, b = {}  |  Succession timestep: {} years",
        config.kernel.k, config.kernel.b, config.succession_timestep
    );
    println!();

    // 1. Species traits from the embedded CSV.
    let species = load_species_reader(Cursor::new(SPECIES_CSV))?;
    println!("Loaded {} species, overall max distance {} m", species.len(), species.overall_max_distance());

    // 2. Synthetic landscape.
    let meta = RasterMeta::new(GRID_SIDE, GRID_SIDE * GRID_SIDE, CELL_SIZE, 0.0, 0.0)?;
    let mut rng = SimRng::new(config.seed);
    let rasters: Vec<_> = species
        .iter()
        .map(|_| terrain::patchy_raster(&meta, &mut rng, 6, 3))
        .collect();
    for (t, r) in species.iter().zip(&rasters) {
        println!("  species {:<3} {:>5} source pixels", t.code.get(), r.occupied());
    }
    let cells = terrain::receiving_cells(&meta, &mut rng, RECEIVING_CELLS);
    let pools = terrain::eligibility(&mut rng, RECEIVING_CELLS, species.len(), P_ELIGIBLE);
    println!();

    // 3. Build.
    let dispersal = DispersalBuilder::new(config.clone(), meta, species, cells, rasters)
        .eligibility(pools)
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = DemoObserver {
        progress:  ProgressReporter::new(CELL_SIZE),
        sweep_log: SweepLogObserver::new(writer),
        offsets:   0,
    };

    // 5. Run.
    let mut rngs = CellRngs::new(dispersal.cell_count(), rng.next_seed(0));
    let t0 = Instant::now();
    let arrivals = dispersal.run(rngs.as_mut_slice(), &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.sweep_log.take_error() {
        log::warn!("sweep log not fully written: {e}");
    }
    let completions = obs.sweep_log.events().to_vec();
    let offsets = obs.offsets;
    let mut writer = obs.sweep_log.into_writer();
    write_matrix(&mut writer, &arrivals)?;
    writer.finish()?;

    // 6. Summary.
    log::info!("Dispersal complete in {:.3} s ({offsets} spiral offsets)", elapsed.as_secs_f64());
    log::info!("  arrivals.csv           : {} rows", arrivals.count());
    log::info!("  species_summary.csv    : {} rows", arrivals.species_count());
    log::info!("  species_completion.csv : {} rows", completions.len());
    println!();

    println!("{:<10} {:>9} {:>10} {:>12}", "Species", "Arrivals", "Done at", "Next bound");
    println!("{}", "-".repeat(44));
    for species in SpeciesCode::all(arrivals.species_count()) {
        let done = completions.iter().find(|c| c.species_code == species.get());
        println!(
            "{:<10} {:>9} {:>10} {:>12}",
            species.get(),
            arrivals.count_for(species),
            done.map_or("-".to_string(), |c| format!("{:.0} m", c.distance)),
            done.map_or("-".to_string(), |c| format!("{:.0} m", c.new_max_distance)),
        );
    }

    Ok(())
}
