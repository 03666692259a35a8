//! Use-Case: Stützpunkt-Index einer Position suchen.

use crate::core::{Feature, Position};

/// Erster Index, dessen Position komponentenweise exakt gleich ist.
///
/// Gleitkomma-Vergleich ohne Toleranz; berechnete Mittelpunkte können daher
/// verfehlt werden. `None` ist ein regulärer Ausgang.
pub fn find_vertex_index(line: &Feature, vertex: &Position) -> Option<usize> {
    line.geometry
        .positions()
        .iter()
        .position(|candidate| candidate == vertex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erster_treffer_gewinnt() {
        let line = Feature::line_string("l", [[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        assert_eq!(
            find_vertex_index(&line, &Position::lon_lat(0.0, 0.0)),
            Some(0)
        );
        assert_eq!(
            find_vertex_index(&line, &Position::lon_lat(1.0, 1.0)),
            Some(1)
        );
    }

    #[test]
    fn test_exakter_vergleich_ohne_toleranz() {
        let line = Feature::line_string("l", [[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(
            find_vertex_index(&line, &Position::lon_lat(1.0 + 1e-12, 1.0)),
            None
        );
    }

    #[test]
    fn test_hoehe_gehoert_zum_vergleich() {
        let line = Feature::line_string("l", [[0.0, 0.0, 5.0], [1.0, 1.0, 5.0]]);
        assert_eq!(
            find_vertex_index(&line, &Position::from([1.0, 1.0, 5.0])),
            Some(1)
        );
        assert_eq!(find_vertex_index(&line, &Position::lon_lat(1.0, 1.0)), None);
    }
}
