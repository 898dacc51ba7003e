fn main() {
    std::process::exit(matchscrape::cli::run());
}
