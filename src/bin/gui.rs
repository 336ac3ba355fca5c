fn main() {
    env_logger::init();

    mandel_explorer::run_gui();
}
