//! Tests for argument parsing and layout resolution

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use mathmatix_tools::io::cli::{Cli, Command, LayoutMode};
    use mathmatix_tools::io::configuration::{
        DEFAULT_AVATAR_DIR, DEFAULT_BANDED_SHEET_PATH, DEFAULT_ITEM_BANK_INPUT,
        DEFAULT_ITEM_BANK_OUTPUT, DEFAULT_SHEET_PATH,
    };
    use mathmatix_tools::sprite::SheetLayout;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mathmatix-tools").chain(args.iter().copied()))
            .unwrap()
    }

    // Tests the clap definition is internally consistent
    // Verified by declaring two args with the same short flag
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    // Tests split defaults to the uniform layout and shipped paths
    // Verified by changing the default layout
    #[test]
    fn test_split_defaults() {
        let cli = parse(&["split"]);
        assert!(cli.should_show_progress());

        let Command::Split(args) = cli.command else {
            panic!("Expected split command");
        };
        assert_eq!(args.layout, LayoutMode::Uniform);
        assert_eq!(args.out, PathBuf::from(DEFAULT_AVATAR_DIR));
        assert_eq!(args.sheet_path(), PathBuf::from(DEFAULT_SHEET_PATH));

        let (layout, names) = args.resolve().unwrap();
        assert_eq!(layout, SheetLayout::default());
        assert_eq!(names.len(), 20);
    }

    // Tests the banded layout picks its own sheet and band table
    // Verified by sharing the uniform default path
    #[test]
    fn test_split_banded() {
        let cli = parse(&["split", "--layout", "banded", "--cols", "2"]);
        let Command::Split(args) = cli.command else {
            panic!("Expected split command");
        };

        assert_eq!(args.sheet_path(), PathBuf::from(DEFAULT_BANDED_SHEET_PATH));
        let (layout, _) = args.resolve().unwrap();
        assert_eq!(layout.cols(), 2);
        assert_eq!(layout.rows(), 5);
    }

    // Tests a layout file overrides names and bands
    // Verified by ignoring the layout file
    #[test]
    fn test_split_layout_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(
            &path,
            "cols = 2\nnames = [\"owl\", \"wolf\"]\nbands = [[0, 10]]\n",
        )
        .unwrap();

        let cli = parse(&["split", "--layout-file", path.to_str().unwrap()]);
        let Command::Split(args) = cli.command else {
            panic!("Expected split command");
        };
        let (layout, names) = args.resolve().unwrap();

        assert_eq!(
            layout,
            SheetLayout::Banded {
                cols: 2,
                bands: vec![(0, 10)]
            }
        );
        assert_eq!(names, vec!["owl".to_string(), "wolf".to_string()]);
    }

    // Tests diagnostics accept grid overrides and a global quiet flag
    // Verified by making quiet a top-level-only flag
    #[test]
    fn test_grid_args_and_quiet() {
        let cli = parse(&["margins", "sheet.png", "--rows", "4", "-t", "200", "--quiet"]);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());

        let Command::Margins(args) = cli.command else {
            panic!("Expected margins command");
        };
        assert_eq!(args.sheet, PathBuf::from("sheet.png"));
        assert_eq!(args.cols, 4);
        assert_eq!(args.rows, 4);
        assert_eq!(args.threshold, 200);
    }

    // Tests fix-items falls back on the usual file names
    // Verified by swapping the defaults
    #[test]
    fn test_fix_items_defaults() {
        let Command::FixItems(args) = parse(&["fix-items"]).command else {
            panic!("Expected fix-items command");
        };
        assert_eq!(args.input, PathBuf::from(DEFAULT_ITEM_BANK_INPUT));
        assert_eq!(args.output, PathBuf::from(DEFAULT_ITEM_BANK_OUTPUT));
    }

    // Tests the diagram request comes from the argument or a file
    // Verified by reading the file even when JSON is given
    #[test]
    fn test_diagram_request_sources() {
        let Command::Diagram(inline) = parse(&["diagram", r#"{"type":"angle"}"#]).command else {
            panic!("Expected diagram command");
        };
        assert_eq!(inline.request_text().unwrap(), r#"{"type":"angle"}"#);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, r#"{"type":"triangle"}"#).unwrap();
        let Command::Diagram(from_file) =
            parse(&["diagram", "--input", path.to_str().unwrap()]).command
        else {
            panic!("Expected diagram command");
        };
        assert_eq!(from_file.request_text().unwrap(), r#"{"type":"triangle"}"#);

        let Command::Diagram(empty) = parse(&["diagram"]).command else {
            panic!("Expected diagram command");
        };
        assert!(empty.request_text().is_err());
    }

    // Tests inline JSON and --input are mutually exclusive
    // Verified by removing the conflict
    #[test]
    fn test_diagram_conflicting_sources() {
        let result = Cli::try_parse_from([
            "mathmatix-tools",
            "diagram",
            "{}",
            "--input",
            "request.json",
        ]);
        assert!(result.is_err());
    }
}
