fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelzoom::PpmFilePresenter::new();
    let mut controller = mandelzoom::SnapshotController::new(presenter);

    controller.generate(&mandelzoom::ExplorerConfig::default())?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
