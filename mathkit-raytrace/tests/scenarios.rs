use mathkit_core::{MathError, Point2, Point3};
use mathkit_raytrace::{CellHit, GridTraversal2D, GridTraversal3D, TraversalConfig};

fn hit(cell: (i64, i64), entry: (i64, i64)) -> CellHit<Point2> {
    CellHit {
        cell: cell.into(),
        entry: entry.into(),
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn axis_aligned_segment_crosses_three_cells() {
    let grid = GridTraversal2D::new(10, 10).unwrap();
    let hits: Vec<_> = grid.trace((5, 5), (25, 5)).collect();
    assert_eq!(
        hits,
        vec![
            hit((0, 0), (5, 5)),
            hit((1, 0), (10, 5)),
            hit((2, 0), (20, 5))
        ]
    );
}

#[test]
fn zero_length_segment_yields_start_only() {
    let grid = GridTraversal2D::new(10, 10).unwrap();
    let hits: Vec<_> = grid.trace((3, 3), (3, 3)).collect();
    assert_eq!(hits, vec![hit((0, 0), (3, 3))]);
}

#[test]
fn diagonal_path_is_contiguous_and_ends_at_target() {
    let grid = GridTraversal2D::new(10, 10).unwrap();
    let cells: Vec<Point2> = grid.trace((0, 0), (20, 10)).map(|h| h.cell).collect();

    for pair in cells.windows(2) {
        assert_eq!(
            pair[0].manhattan(&pair[1]),
            1,
            "{} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(cells.last(), Some(&Point2::new(2, 1)));
}

#[test]
fn zero_width_is_rejected_before_tracing() {
    assert!(matches!(
        GridTraversal2D::new(0, 10),
        Err(MathError::InvalidConfiguration {
            axis: "width",
            value: 0
        })
    ));
    assert!(matches!(
        GridTraversal3D::new(-4, 10, 10),
        Err(MathError::InvalidConfiguration {
            axis: "width",
            value: -4
        })
    ));
}

// ============================================================================
// Same cell, different points
// ============================================================================

#[test]
fn segment_inside_one_cell_yields_one_hit() {
    let grid = GridTraversal3D::new(8, 8, 8).unwrap();
    let hits: Vec<_> = grid.trace((1, 2, 3), (7, 0, 6)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].cell, Point3::ORIGIN);
    assert_eq!(hits[0].entry, Point3::new(1, 2, 3));
}

// ============================================================================
// Sharing one traversal
// ============================================================================

#[test]
fn traversal_is_shared_across_threads() {
    let grid = GridTraversal2D::new(7, 3).unwrap();
    let expected: Vec<_> = grid.trace((0, 0), (100, 37)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| grid.trace((0, 0), (100, 37)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn configured_traversal_matches_direct_construction() {
    let config = TraversalConfig::from_json(r#"{"cell_size": [10, 10]}"#).unwrap();
    let planar = match config.build().unwrap() {
        mathkit_raytrace::GridTraversal::Planar(grid) => grid,
        other => panic!("expected planar traversal, got {:?}", other),
    };
    let direct = GridTraversal2D::new(10, 10).unwrap();
    assert_eq!(
        planar.trace((5, 5), (25, 5)).collect::<Vec<_>>(),
        direct.trace((5, 5), (25, 5)).collect::<Vec<_>>()
    );
}
