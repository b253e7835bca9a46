fn main() {
    prodsearch::app::cli::run();
}
