fn main() {
    wavecheck::app::cli::run();
}
