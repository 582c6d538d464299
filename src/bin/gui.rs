fn main() {
    env_logger::init();

    fractalscope::run_gui();
}
