use rect_mesh::prelude::*;

fn ccw(mesh: &TriMesh) -> bool {
    (0..mesh.triangles.len()).all(|i| mesh.signed_area(i).unwrap() >= 0.0)
}

#[test]
fn two_by_two_lattice_scenario() {
    let mesh = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.5, 0.5))
        .run()
        .unwrap();

    assert_eq!(mesh.points.len(), 4);
    assert_eq!(mesh.triangles.len(), 2);
    assert!(ccw(&mesh));

    let mult = mesh.edge_multiplicity();
    let perimeter = [
        Edge::new(0, 1),
        Edge::new(1, 3),
        Edge::new(2, 3),
        Edge::new(0, 2),
    ];
    for e in perimeter {
        assert_eq!(mult.get(e), 1, "perimeter edge {e}");
    }
    let diagonal = mesh.interior_edges();
    assert_eq!(diagonal.len(), 1);
    assert_eq!(mult.get(diagonal[0]), 2);

    assert_eq!(mesh.boundary.nodes, vec![0, 1, 3, 2]);
    assert_eq!(mesh.points[mesh.boundary.nodes[0]], Point2::new(0.0, 0.0));
    assert_eq!(
        mesh.boundary.edges,
        vec![
            Edge::new(0, 1),
            Edge::new(1, 3),
            Edge::new(3, 2),
            Edge::new(2, 0)
        ]
    );
}

#[test]
fn larger_grid_counts_follow_euler() {
    let mesh = MeshPipeline::new(RectDomain::new(-2.0, 2.0, 0.0, 3.0, 0.5, 0.5))
        .run()
        .unwrap();
    let (nx, ny) = (8, 6);
    assert_eq!(mesh.points.len(), nx * ny);
    assert_eq!(mesh.triangles.len(), 2 * (nx - 1) * (ny - 1));
    assert_eq!(mesh.boundary_edges.len(), 2 * (nx - 1) + 2 * (ny - 1));
    assert_eq!(mesh.boundary.len(), mesh.boundary_edges.len());
    assert_eq!(
        mesh.edges.len(),
        (3 * mesh.triangles.len() + mesh.boundary_edges.len()) / 2
    );
    assert!(ccw(&mesh));
    assert!((mesh.total_area() - 4.0 * 3.0).abs() < 1e-9);
    assert!(mesh.validate_invariants().is_ok());
}

#[test]
fn boundary_walk_visits_corners_in_ccw_order() {
    let mesh = MeshPipeline::new(RectDomain::new(0.0, 3.0, 0.0, 2.0, 1.0, 1.0))
        .run()
        .unwrap();
    // 3x2 lattice: bottom row 0 1 2, top row 3 4 5.
    assert_eq!(mesh.boundary.nodes, vec![0, 1, 2, 5, 4, 3]);
    for node in 0..6 {
        assert!(mesh.is_boundary_node(node));
    }
}

#[test]
fn interior_nodes_are_not_on_the_boundary() {
    let mesh = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 1.0 / 3.0, 1.0 / 3.0))
        .with_options(MeshOptions {
            triangulation: TriangulationKind::Structured,
            ..MeshOptions::default()
        })
        .run()
        .unwrap();
    assert_eq!(mesh.points.len(), 9);
    assert!(!mesh.is_boundary_node(4));
    assert_eq!(mesh.boundary.len(), 8);
    assert_eq!(mesh.boundary.nodes, vec![0, 1, 2, 5, 8, 7, 6, 3]);
}

#[test]
fn degenerate_grid_aborts_pipeline() {
    let err = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 2.0, 0.5))
        .run()
        .unwrap_err();
    assert!(matches!(err, MeshError::DegenerateGrid { .. }));
}

struct Fixed(Vec<Triangle>);

impl Triangulator for Fixed {
    fn triangulate(&self, _points: &PointSet) -> Result<Vec<Triangle>, MeshError> {
        Ok(self.0.clone())
    }
}

#[test]
fn custom_triangulator_output_is_oriented() {
    // Clockwise input for the 2x2 lattice.
    let fixed = Fixed(vec![Triangle::new(0, 3, 1), Triangle::new(0, 2, 3)]);
    let mesh = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.5, 0.5))
        .run_with(&fixed)
        .unwrap();
    assert_eq!(
        mesh.triangles,
        vec![Triangle::new(0, 1, 3), Triangle::new(0, 3, 2)]
    );
    assert!(ccw(&mesh));
}

#[test]
fn non_manifold_triangulation_is_rejected() {
    // Three triangles on edge (0, 3).
    let fixed = Fixed(vec![
        Triangle::new(0, 1, 3),
        Triangle::new(0, 3, 2),
        Triangle::new(0, 3, 1),
    ]);
    let err = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.5, 0.5))
        .run_with(&fixed)
        .unwrap_err();
    assert_eq!(
        err,
        MeshError::NonManifoldMesh {
            edge: Edge::new(0, 3),
            multiplicity: 3
        }
    );
}

#[test]
fn out_of_range_triangle_is_rejected() {
    let fixed = Fixed(vec![Triangle::new(0, 1, 4)]);
    let err = MeshPipeline::new(RectDomain::new(0.0, 1.0, 0.0, 1.0, 0.5, 0.5))
        .run_with(&fixed)
        .unwrap_err();
    assert_eq!(
        err,
        MeshError::VertexOutOfRange {
            triangle: 0,
            vertex: 4,
            num_points: 4
        }
    );
}

#[test]
fn errors_name_their_stage() {
    let err = MeshError::DisconnectedBoundary { node: 7, degree: 3 };
    assert_eq!(
        err.to_string(),
        "boundary: node 7 has 3 boundary edges (expected 2)"
    );
    let err = MeshError::NonManifoldMesh {
        edge: Edge::new(4, 1),
        multiplicity: 3,
    };
    assert_eq!(
        err.to_string(),
        "edges: edge (1, 4) is shared by 3 triangles (expected 1 or 2)"
    );
}

#[test]
fn kept_zero_area_triangles_yield_a_typed_boundary_error() {
    let line: PointSet = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]
        .into_iter()
        .map(Point2::from)
        .collect();
    for handling in [DegenerateHandling::Ignore, DegenerateHandling::Warn] {
        let err = assemble_mesh(line.clone(), vec![Triangle::new(0, 1, 2)], handling).unwrap_err();
        assert_eq!(err, MeshError::DegenerateBoundary { nodes: 3 });
    }
    let err = assemble_mesh(line, vec![Triangle::new(0, 1, 2)], DegenerateHandling::Error)
        .unwrap_err();
    assert!(matches!(err, MeshError::DegenerateTriangle { triangle: 0, .. }));
}
