fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all("output")?;
    fractalscope::render_snapshot("output/fractalscope.ppm")?;

    Ok(())
}
