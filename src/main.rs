fn main() {
    boltstack::app::cli::run();
}
