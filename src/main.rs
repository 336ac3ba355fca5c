fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = mandel_explorer::PpmFilePresenter::new();
    let mut controller = mandel_explorer::SnapshotController::new(presenter);

    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
