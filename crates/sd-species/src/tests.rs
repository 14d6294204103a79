//! Unit tests for sd-species.

use std::io::Cursor;

use sd_core::SpeciesCode;

use crate::{SpeciesError, SpeciesTable, load_species_reader};

// ── SpeciesTable ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    fn three_species() -> SpeciesTable {
        SpeciesTable::from_rows([(1, 100.0, 303.0), (2, 30.0, 200.0), (3, 75.0, 300.0)]).unwrap()
    }

    #[test]
    fn lookup_by_code() {
        let t = three_species();
        assert_eq!(t.len(), 3);
        let sp2 = t.get(SpeciesCode::from_index(1));
        assert_eq!(sp2.effective_distance, 30.0);
        assert_eq!(sp2.max_distance, 200.0);
    }

    #[test]
    fn overall_max() {
        assert_eq!(three_species().overall_max_distance(), 303.0);
    }

    #[test]
    fn codes_in_order() {
        let codes: Vec<u16> = three_species().codes().map(SpeciesCode::get).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[test]
    fn resolve_raw_codes() {
        let t = three_species();
        assert_eq!(t.code(3).unwrap().get(), 3);
        assert!(t.code(0).is_err());
        assert!(t.code(4).is_err());
    }

    #[test]
    fn gap_in_codes_rejected() {
        let err = SpeciesTable::from_rows([(1, 10.0, 20.0), (3, 10.0, 20.0)]).unwrap_err();
        assert!(matches!(err, SpeciesError::NotDense { row: 1, expected: 2, found: 3 }));
    }

    #[test]
    fn unsorted_codes_rejected() {
        assert!(SpeciesTable::from_rows([(2, 10.0, 20.0), (1, 10.0, 20.0)]).is_err());
    }

    #[test]
    fn zero_based_codes_rejected() {
        assert!(SpeciesTable::from_rows([(0, 10.0, 20.0)]).is_err());
    }

    #[test]
    fn non_positive_distance_rejected() {
        assert!(SpeciesTable::from_rows([(1, 0.0, 20.0)]).is_err());
        assert!(SpeciesTable::from_rows([(1, 10.0, -5.0)]).is_err());
        assert!(SpeciesTable::from_rows([(1, 10.0, f64::INFINITY)]).is_err());
    }

    #[test]
    fn empty_rejected() {
        let rows: Vec<(u32, f64, f64)> = vec![];
        assert!(matches!(SpeciesTable::from_rows(rows), Err(SpeciesError::Empty)));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn load_sorts_rows() {
        let csv = "species_code,effective_distance,max_distance\n\
                   2,30,200\n\
                   1,100,303\n";
        let t = load_species_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(SpeciesCode::from_index(0)).max_distance, 303.0);
    }

    #[test]
    fn camel_case_headers_and_extra_columns() {
        let csv = "species,speciesCode,seeddistance_eff,seeddistance_max,longevity\n\
                   Abie_bal,1,25,160,200\n\
                   Pice_gla,2,100,303,400\n";
        let t = load_species_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.get(SpeciesCode::from_index(1)).effective_distance, 100.0);
    }

    #[test]
    fn missing_column_is_parse_error() {
        let csv = "species_code,max_distance\n1,200\n";
        assert!(matches!(
            load_species_reader(Cursor::new(csv)),
            Err(SpeciesError::Parse(_))
        ));
    }

    #[test]
    fn non_dense_file_rejected() {
        let csv = "species_code,effective_distance,max_distance\n1,10,20\n4,10,20\n";
        assert!(load_species_reader(Cursor::new(csv)).is_err());
    }
}
