use gridfill::{run, verify_equivalence, GridConfig, RunSummary, Traversal};

#[test]
fn test_run_reference_config_in_memory() {
    for traversal in Traversal::ALL {
        let mut buf = Vec::new();
        let config = GridConfig::reference().with_traversal(traversal);
        let summary = run(&config, &mut buf).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                rows: 100,
                cols: 200,
                traversal,
                lines_written: 20_000,
            }
        );

        let out = String::from_utf8(buf).unwrap();
        let expected: String = (0..20_000).map(|k| format!("{}\n", k)).collect();
        assert_eq!(out, expected);
    }
}

#[test]
fn test_verify_equivalence_across_shapes() {
    for (rows, cols) in [(0, 0), (1, 1), (3, 1), (1, 3), (17, 29)] {
        let report = verify_equivalence(&GridConfig::with_dims(rows, cols)).unwrap();

        assert!(report.is_identical(), "{}x{}: {:?}", rows, cols, report);
        assert_eq!(report.lines, rows * cols);
    }
}
