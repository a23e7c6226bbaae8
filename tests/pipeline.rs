use plotgen::charts::{plot_path, save_figure, ChartKind, ChartLabels, ChartRenderer, SaveError};
use plotgen::config::RenderConfig;
use plotgen::data::{is_txt, load_and_validate, KeyMode, LoaderError, ValidationError};
use plotgen::pipeline::{plot_file, PlotError};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn renderer_in(dir: &Path) -> ChartRenderer {
    ChartRenderer::new(RenderConfig {
        width: 480,
        height: 360,
        output_dir: dir.join("plots"),
        ..RenderConfig::default()
    })
}

#[test]
fn test_fixture_extensions() {
    assert!(is_txt(&fixture("data1.txt")));
    assert!(!is_txt(Path::new("data1.txt.xlsx")));
}

#[test]
fn test_load_fixtures() {
    let ds = load_and_validate(&fixture("data1.txt"), KeyMode::Numeric).unwrap();
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.x_label, None);

    let ds = load_and_validate(&fixture("data2_xlabel.txt"), KeyMode::Numeric).unwrap();
    assert_eq!(ds.len(), 4);
    assert_eq!(ds.x_label.as_deref(), Some("Month"));

    let ds = load_and_validate(&fixture("data4_labels.txt"), KeyMode::Label).unwrap();
    assert_eq!(ds.labels(), vec!["apples", "pears", "plums", "cherries"]);
}

#[test]
fn test_wrong_file_fails_on_first_broken_rule() {
    let err = load_and_validate(&fixture("data3wrongfile.txt"), KeyMode::Numeric).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Validation(ValidationError::MissingDelimiter { line: 3, .. })
    ));
}

#[test]
fn test_render_and_save_all_kinds() {
    let tmp = tempfile::tempdir().unwrap();
    let renderer = renderer_in(tmp.path());
    let data = fixture("data1.txt");

    let jobs = [
        (ChartKind::Line, ChartLabels::new("X", "Y", "Line Plot")),
        (ChartKind::Pie, ChartLabels::titled("Pie Chart")),
        (ChartKind::Bar, ChartLabels::new("X", "Y", "Bar Plot")),
    ];
    for (kind, labels) in &jobs {
        let figure = plot_file(Some(data.as_path()), *kind, labels, &renderer).unwrap();
        let path = save_figure(Some(&figure), &labels.title, renderer.config()).unwrap();

        assert_eq!(path, plot_path(&renderer.config().output_dir, &labels.title));
        let saved = image::open(&path).unwrap().to_rgb8();
        let (w, h) = saved.dimensions();
        let (fw, fh) = figure.dimensions();
        assert!(w <= fw && h <= fh, "trimmed image must not grow");
    }

    assert!(tmp.path().join("plots/Line Plot.png").exists());
    assert!(tmp.path().join("plots/Pie Chart.png").exists());
    assert!(tmp.path().join("plots/Bar Plot.png").exists());
}

#[test]
fn test_bar_chart_with_text_labels() {
    let tmp = tempfile::tempdir().unwrap();
    let renderer = renderer_in(tmp.path());
    let figure = plot_file(
        Some(fixture("data4_labels.txt").as_path()),
        ChartKind::Bar,
        &ChartLabels::new("Fruit", "Count", "Basket"),
        &renderer,
    )
    .unwrap();
    assert_eq!(figure.kind(), ChartKind::Bar);
}

#[test]
fn test_failures_leave_nothing_to_save() {
    let tmp = tempfile::tempdir().unwrap();
    let renderer = renderer_in(tmp.path());

    for kind in ChartKind::ALL {
        let no_file = plot_file(None, kind, &ChartLabels::default(), &renderer);
        assert!(matches!(no_file, Err(PlotError::NoFileSelected)));

        let bad = plot_file(
            Some(fixture("data3wrongfile.txt").as_path()),
            kind,
            &ChartLabels::default(),
            &renderer,
        );
        let figure = bad.ok();
        assert!(figure.is_none());

        let err = save_figure(figure.as_ref(), "should_not_exist", renderer.config()).unwrap_err();
        assert!(matches!(err, SaveError::NoCurrentPlot));
    }
    assert!(!renderer.config().output_dir.exists());
}
