fn main() {
    terragen::app::cli::run();
}
