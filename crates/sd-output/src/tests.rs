//! Integration tests for sd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ArrivalRow, CompletionRow, SpeciesSummaryRow};
    use crate::writer::ArrivalWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("arrivals.csv").exists());
        assert!(dir.path().join("species_summary.csv").exists());
        assert!(dir.path().join("species_completion.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir, "arrivals.csv"), ["cell_index", "species_code"]);
        assert_eq!(headers(&dir, "species_summary.csv"), ["species_code", "arrivals"]);
        assert_eq!(
            headers(&dir, "species_completion.csv"),
            ["species_code", "step", "distance", "new_max_distance"]
        );
    }

    #[test]
    fn csv_arrival_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_arrivals(&[
            ArrivalRow { cell_index: 0, species_code: 2 },
            ArrivalRow { cell_index: 4, species_code: 1 },
        ])
        .unwrap();
        w.write_species_summary(&SpeciesSummaryRow { species_code: 1, arrivals: 1 }).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "arrivals.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[1][0], "4");

        let summary = records(&dir, "species_summary.csv");
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][1], "1");
    }

    #[test]
    fn csv_completion_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_completions(&[CompletionRow {
            species_code:     3,
            step:             12,
            distance:         22.5,
            new_max_distance: 200.0,
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "species_completion.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "12");
        assert_eq!(&rows[0][2], "22.5");
        assert_eq!(&rows[0][3], "200");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("no/such/dir")).is_err());
    }
}

// ── End-to-end with the engine ────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use sd_core::{DispersalConfig, KernelParams, ScriptedDraws};
    use sd_engine::{ArrivalMatrix, Dispersal, DispersalBuilder};
    use sd_spatial::{PixelIndex, RasterMeta, SourceRaster};
    use sd_species::SpeciesTable;
    use tempfile::TempDir;

    use crate::row::ArrivalRow;
    use crate::{ArrivalWriter, CompletionRow, CsvWriter, OutputResult, SpeciesSummaryRow, SweepLogObserver, write_matrix};

    /// In-memory writer for checking what reaches the backend.
    #[derive(Default)]
    struct MemoryWriter {
        arrivals:    Vec<ArrivalRow>,
        summaries:   Vec<SpeciesSummaryRow>,
        completions: Vec<CompletionRow>,
        finishes:    usize,
    }

    impl ArrivalWriter for MemoryWriter {
        fn write_arrivals(&mut self, rows: &[ArrivalRow]) -> OutputResult<()> {
            self.arrivals.extend_from_slice(rows);
            Ok(())
        }
        fn write_species_summary(&mut self, row: &SpeciesSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn write_completions(&mut self, rows: &[CompletionRow]) -> OutputResult<()> {
            self.completions.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Two receiving cells on a 5 × 5 grid of 10 m cells.  Species 1
    /// (max 20) sits under cell 0; species 2 (max 200) sits under cell 1.
    fn two_cell_dispersal() -> Dispersal {
        let meta = RasterMeta::new(5, 25, 10.0, 0.0, 0.0).unwrap();
        let table = SpeciesTable::from_rows([(1, 10.0, 20.0), (2, 100.0, 200.0)]).unwrap();
        let mut r1 = SourceRaster::empty(25);
        r1.set(PixelIndex(7), 1);
        let mut r2 = SourceRaster::empty(25);
        r2.set(PixelIndex(19), 1);
        let cells = vec![meta.cell_center(PixelIndex(7)), meta.cell_center(PixelIndex(19))];
        let config = DispersalConfig {
            kernel:              KernelParams::new(0.5, 0.3),
            succession_timestep: 1,
            ..DispersalConfig::default()
        };
        DispersalBuilder::new(config, meta, table, cells, vec![r1, r2])
            .eligibility(vec![vec![1], vec![2]])
            .build()
            .unwrap()
    }

    fn run(d: &Dispersal) -> (ArrivalMatrix, SweepLogObserver<MemoryWriter>) {
        let mut obs = SweepLogObserver::new(MemoryWriter::default());
        let mut draws = vec![ScriptedDraws::constant(0.0); d.cell_count()];
        let arrivals = d.run(&mut draws, &mut obs).unwrap();
        (arrivals, obs)
    }

    #[test]
    fn sweep_log_records_retirements() {
        let (_, mut obs) = run(&two_cell_dispersal());

        // Both species arrive at distance 0 and retire together at step 1.
        let events = obs.events().to_vec();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].species_code, 1);
        assert_eq!(events[1].species_code, 2);
        assert!(events.iter().all(|e| e.step == 1 && e.distance == 10.0));
        assert!(events.iter().all(|e| e.new_max_distance == 0.0));

        let summary = obs.summary().unwrap();
        assert_eq!(summary.steps, 2);
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.completions, events);
    }

    #[test]
    fn matrix_rows_and_summaries() {
        let (arrivals, obs) = run(&two_cell_dispersal());
        let mut writer = obs.into_writer();

        write_matrix(&mut writer, &arrivals).unwrap();

        assert_eq!(
            writer.arrivals,
            vec![
                ArrivalRow { cell_index: 0, species_code: 1 },
                ArrivalRow { cell_index: 1, species_code: 2 },
            ]
        );
        assert_eq!(
            writer.summaries,
            vec![
                SpeciesSummaryRow { species_code: 1, arrivals: 1 },
                SpeciesSummaryRow { species_code: 2, arrivals: 1 },
            ]
        );
    }

    #[test]
    fn observer_resets_between_runs() {
        let d = two_cell_dispersal();
        let mut obs = SweepLogObserver::new(MemoryWriter::default());
        for _ in 0..2 {
            let mut draws = vec![ScriptedDraws::constant(0.0); d.cell_count()];
            d.run(&mut draws, &mut obs).unwrap();
        }
        assert_eq!(obs.events().len(), 2);
        assert_eq!(obs.into_writer().completions.len(), 4);
    }

    #[test]
    fn csv_end_to_end() {
        let dir = TempDir::new().unwrap();
        let d = two_cell_dispersal();
        let mut obs = SweepLogObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut draws = vec![ScriptedDraws::constant(0.0); d.cell_count()];
        let arrivals = d.run(&mut draws, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut writer = obs.into_writer();
        write_matrix(&mut writer, &arrivals).unwrap();
        writer.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("arrivals.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr = csv::Reader::from_path(dir.path().join("species_completion.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr = csv::Reader::from_path(dir.path().join("species_summary.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
    }
}
