fn main() {
    roshambo::cli::run();
}
